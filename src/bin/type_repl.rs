use std::io;
use std::io::Write;

use logitype::types::{
    get_size_of_fixed_length_type, is_type_compatible, string_to_logical_type, wire, LogicalType,
};

fn lookup(input: &str) -> LogicalType {
    match input.parse::<u8>() {
        Ok(code) => LogicalType::try_from(code).unwrap_or_else(|e| {
            log::warn!("{}", e);
            LogicalType::Unknown
        }),
        Err(_) => string_to_logical_type(input),
    }
}

fn describe(t: LogicalType) {
    let guards: Vec<String> = t.guards().map(|g| g.to_string()).collect();
    println!("name:     {} ({})", t, t.code());
    println!("delegate: {}", t.delegate());
    println!("size:     {}", get_size_of_fixed_length_type(t));
    match wire::try_to_thrift(t) {
        Some(ttype) => println!("wire:     {:?} ({})", ttype, ttype as i32),
        None => println!("wire:     -"),
    }
    println!("in op:    {:?}", wire::to_in_opcode(t));
    println!("guards:   {}", guards.join(" "));
}

fn main() {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}:{} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.file().unwrap_or("?"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let green = "\x1b[32m";
    let default = "\x1b[0m";
    let mut input = String::new();
    loop {
        input.clear();
        print!("{green}type>{default} ");
        let _ = io::stdout().flush();

        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {
                let line = input.trim();
                if line == "quit" {
                    break;
                }
                // `a <- b` checks implicit cast of b into a
                if let Some((lhs, rhs)) = line.split_once("<-") {
                    let (lhs, rhs) = (lookup(lhs.trim()), lookup(rhs.trim()));
                    println!("{} <- {}: {}", lhs, rhs, is_type_compatible(lhs, rhs));
                    continue;
                }
                describe(lookup(line));
            }
            Err(e) => {
                println!("error: {e}");
                break;
            }
        }
    }
}
