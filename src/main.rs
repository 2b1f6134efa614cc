use std::env;
use std::fs;
use std::process;

use shamir_reconstruct::shamir;
use shamir_reconstruct::{BigInt, Result};

fn reconstruct_file(path: &str) -> Result<BigInt> {
    let content = fs::read_to_string(path)?;
    shamir::reconstruct_from_json(&content)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <json_file_1> [<json_file_2> ...]", args[0]);
        process::exit(1);
    }

    let mut failed = false;
    for (index, path) in args[1..].iter().enumerate() {
        match reconstruct_file(path) {
            Ok(secret) => println!("tc{} secret (c) = {}", index + 1, secret),
            Err(err) => {
                eprintln!("{}: {}", path, err);
                failed = true;
            }
        }
    }
    if failed {
        process::exit(1);
    }
}
