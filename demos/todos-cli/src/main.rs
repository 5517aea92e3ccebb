//! Interactive command-line front end for the todo application.
//!
//! This is the view layer: it translates typed commands into dispatched
//! actions, owns the id generator for new todos, and re-renders the visible
//! todos every time the store notifies it of a transition.

use anyhow::Result;
use statefold_core::environment::SequentialIds;
use statefold_runtime::Store;
use statefold_todos::{AppState, TodoId, VisibilityFilter, actions, app_reducer, visible_todos};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  add <text>                        append a new todo
  toggle <id>                       flip a todo's completion flag
  filter all|active|completed       choose which todos are shown
  list                              print the current view
  dump                              print the raw state as JSON
  help                              show this message
  quit                              exit";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let ids = SequentialIds::new();
    let store = Store::from_default(app_reducer());

    // Render after every dispatch, exactly like a mounted component would.
    let _renderer = store.subscribe(render);

    println!("todos - type 'help' for commands");
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => {}
            "add" => {
                if rest.is_empty() {
                    println!("usage: add <text>");
                } else {
                    store.dispatch(actions::add_todo(&ids, rest))?;
                }
            }
            "toggle" => match rest.parse::<u64>() {
                Ok(raw) => store.dispatch(actions::toggle_todo(TodoId::new(raw)))?,
                Err(_) => println!("usage: toggle <id>"),
            },
            "filter" => match rest.parse::<VisibilityFilter>() {
                Ok(filter) => store.dispatch(actions::set_visibility_filter(filter))?,
                Err(err) => println!("{err}"),
            },
            "list" => store.state(render),
            "dump" => {
                let json = store.state(serde_json::to_string_pretty)?;
                println!("{json}");
            }
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("unknown command {other:?} - type 'help'"),
        }
    }

    Ok(())
}

/// Print the todos visible under the current filter, plus the filter bar.
fn render(state: &AppState) {
    for todo in visible_todos(&state.todos, state.visibility_filter) {
        let mark = if todo.completed { "✓" } else { " " };
        println!("  [{mark}] {} {}", todo.id, todo.text);
    }

    let bar: Vec<String> = VisibilityFilter::ALL_FILTERS
        .iter()
        .map(|filter| {
            if *filter == state.visibility_filter {
                format!("[{filter}]")
            } else {
                filter.to_string()
            }
        })
        .collect();
    println!(
        "  show: {}   ({}/{} done)",
        bar.join(" "),
        state.completed_count(),
        state.count()
    );
}
