//! Line-oriented front end: parses typed commands and runs them on a session.

use std::fmt::Write;

use crate::session::RouteSession;
use crate::{Error, Result};

pub const HELP: &str = "\
Commands:
  add <a> <b> <weight>   add or update an edge
  remove <a> <b>         remove an edge
  route <start> <end>    find the shortest route
  nodes                  list nodes
  neighbors <node>       list a node's neighbors
  show                   list every edge
  save                   write the graph to disk
  help                   show this text
  quit                   leave";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { a: String, b: String, weight: String },
    Remove { a: String, b: String },
    Route { start: String, end: String },
    Nodes,
    Neighbors(String),
    Show,
    Save,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match (name.to_lowercase().as_str(), args) {
            ("add", [a, b, weight]) => Command::Add {
                a: a.to_string(),
                b: b.to_string(),
                weight: weight.to_string(),
            },
            ("remove", [a, b]) => Command::Remove {
                a: a.to_string(),
                b: b.to_string(),
            },
            ("route", [start, end]) => Command::Route {
                start: start.to_string(),
                end: end.to_string(),
            },
            ("nodes", []) => Command::Nodes,
            ("neighbors", [node]) => Command::Neighbors(node.to_string()),
            ("show", []) => Command::Show,
            ("save", []) => Command::Save,
            ("help", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            ("add" | "remove" | "route" | "nodes" | "neighbors" | "show" | "save" | "help", _) => {
                return Err(Error::InvalidCommand(format!(
                    "wrong number of arguments for '{}'",
                    name
                )))
            }
            _ => return Err(Error::InvalidCommand(format!("unknown command '{}'", name))),
        };
        Ok(Some(command))
    }
}

/// Runs a command and returns the text to print
pub fn execute(session: &mut RouteSession, command: &Command) -> Result<String> {
    let output = match command {
        Command::Add { a, b, weight } => session.add_edge(a, b, weight)?.to_string(),
        Command::Remove { a, b } => session.remove_edge(a, b)?.to_string(),
        Command::Route { start, end } => session.find_route(start, end)?.to_string(),
        Command::Nodes => {
            let nodes: Vec<String> = session.nodes().iter().map(|n| n.to_string()).collect();
            nodes.join(" ")
        }
        Command::Neighbors(node) => {
            let mut out = String::new();
            for (neighbor, weight) in session.neighbors(node)? {
                let _ = writeln!(out, "{} ({})", neighbor, weight);
            }
            out
        }
        Command::Show => {
            let mut out = String::new();
            for (a, b, weight) in session.graph().edges() {
                let _ = writeln!(out, "{} - {}: {}", a, b, weight);
            }
            out
        }
        Command::Save => {
            session.save()?;
            "Graph saved".to_string()
        }
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    };
    Ok(output.trim_end().to_string())
}
