use route_finder::shell::{execute, Command, HELP};
use route_finder::storage::{JsonFileStore, DEFAULT_GRAPH_FILE};
use route_finder::RouteSession;
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_GRAPH_FILE.to_string());
    let mut session = RouteSession::open(Box::new(JsonFileStore::new(&path)));

    println!("Route finder ({})", path);
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        match execute(&mut session, &command) {
            Ok(output) if !output.is_empty() => println!("{}", output),
            Ok(_) => {}
            Err(e) => println!("Error: {}", e),
        }
    }

    Ok(())
}
