/*!
 * OS Simulation Engine - CLI Entry Point
 *
 * Reads a simulation request (JSON) from a file or stdin, routes it through
 * the dispatcher, and prints the result report as pretty JSON.
 */

use os_sim_engine::dispatch;
use os_sim_engine::Category;
use std::io::Read;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let category = match args.get(1).map(|s| Category::from_str(s)) {
        Some(Ok(category)) => category,
        Some(Err(e)) => {
            eprintln!("Error: {:?}", miette::Report::new(e));
            return ExitCode::from(2);
        }
        None => {
            eprintln!("Usage: os-sim <scheduling|memory|paging> [request.json]");
            eprintln!("Reads the request payload from the file argument or stdin.");
            return ExitCode::from(2);
        }
    };

    let payload = match read_payload(args.get(2)) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Error: failed to read request: {}", e);
            return ExitCode::from(2);
        }
    };

    let request: serde_json::Value = match serde_json::from_str(&payload) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: request is not valid JSON: {}", e);
            return ExitCode::from(1);
        }
    };

    match dispatch::run(category, &request) {
        Ok(report) => {
            // Serialization of a Value back to text cannot fail
            println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}

fn read_payload(path: Option<&String>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
