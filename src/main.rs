use std::error::Error;
use std::num::NonZero;
use std::path::PathBuf;

use clap::Parser;
use hash_people::config::{Config, DEFAULT_CAP, DEFAULT_DATABASE, MAX_NAME_LEN};
use hash_people::hash::ChainedHashTable;
use hash_people::loader;
use hash_people::logger::initialize_logger;
use hash_people::record::Record;
use log::{error, info};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Record file to load at startup.
    #[arg(short, long, default_value = DEFAULT_DATABASE)]
    file: PathBuf,

    /// Number of buckets in the table.
    #[arg(short, long, default_value_t = DEFAULT_CAP)]
    capacity: NonZero<usize>,

    /// Longest name accepted, in bytes. 0 removes the limit.
    #[arg(short, long, default_value_t = MAX_NAME_LEN)]
    max_name_len: usize,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            database: args.file,
            capacity: args.capacity,
            max_name_len: (args.max_name_len > 0).then_some(args.max_name_len),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logger();

    let config = Config::from(Args::parse());
    let mut table = ChainedHashTable::with_nonzero_cap(config.capacity);

    if let Err(err) = loader::load_file(&config.database, &mut table, config.limits()) {
        error!("failed to load {}: {err}", config.database.display());
        println!("Sorry, we could not open the database file!");
        return Ok(());
    }

    println!("Welcome to the HashPeople Database!");
    println!("We have all sorts of people hashed in this here database");
    println!("Maybe you want us to look and see if we have someone you know?\n\n");

    let mut editor = DefaultEditor::new()?;

    loop {
        println!("1. Look up by first and last name");
        println!("2. Remove a person");
        println!("3. Add a person");
        println!("4. Show every bucket");
        println!("0. Exit program");

        let Some(choice) = ask(&mut editor, "> ")? else {
            break;
        };

        match choice.as_str() {
            "1" => look_up(&mut editor, &table)?,
            "2" => remove(&mut editor, &mut table)?,
            "3" => add(&mut editor, &mut table, &config)?,
            "4" => print!("{}", table.dump()),
            "0" => break,
            other => println!("{other:?} isn't an option."),
        }
        println!();
    }

    let released = table.destroy();
    info!("released {released} records");

    Ok(())
}

/// Prompts for a single token, asking again on blank lines. Returns None if input ends or is
/// interrupted.
fn ask(editor: &mut DefaultEditor, prompt: &str) -> rustyline::Result<Option<String>> {
    loop {
        match editor.readline(prompt) {
            Ok(line) => {
                if let Some(token) = first_token(&line) {
                    return Ok(Some(token.to_owned()));
                }
            },
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(None),
            Err(err) => return Err(err),
        }
    }
}

fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

fn ask_names(editor: &mut DefaultEditor) -> rustyline::Result<Option<(String, String)>> {
    let Some(first_name) = ask(editor, "First name: ")? else {
        return Ok(None);
    };
    let Some(last_name) = ask(editor, "Last name: ")? else {
        return Ok(None);
    };
    Ok(Some((first_name, last_name)))
}

fn ask_id(editor: &mut DefaultEditor) -> rustyline::Result<Option<i32>> {
    let Some(token) = ask(editor, "ID: ")? else {
        return Ok(None);
    };

    match token.parse() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("{token:?} isn't a valid ID.");
            Ok(None)
        },
    }
}

fn look_up(editor: &mut DefaultEditor, table: &ChainedHashTable) -> rustyline::Result<()> {
    let Some((first_name, last_name)) = ask_names(editor)? else {
        return Ok(());
    };

    let mut found = false;
    for person in table.lookup(&first_name, &last_name) {
        println!("Found {person}");
        found = true;
    }

    if !found {
        println!("Sorry, nobody called {first_name} {last_name} is in the database.");
    }
    Ok(())
}

fn remove(editor: &mut DefaultEditor, table: &mut ChainedHashTable) -> rustyline::Result<()> {
    let Some((first_name, last_name)) = ask_names(editor)? else {
        return Ok(());
    };
    let Some(id) = ask_id(editor)? else {
        return Ok(());
    };

    match table.take(&first_name, &last_name, id) {
        Some(person) => println!("Removed {person}"),
        None => println!("Sorry, {first_name} {last_name} with ID {id:05} isn't in the database."),
    }
    Ok(())
}

fn add(
    editor: &mut DefaultEditor,
    table: &mut ChainedHashTable,
    config: &Config,
) -> rustyline::Result<()> {
    let Some((first_name, last_name)) = ask_names(editor)? else {
        return Ok(());
    };

    if let Some(max) = config.max_name_len
        && (first_name.len() > max || last_name.len() > max)
    {
        println!("Names can be at most {max} bytes long.");
        return Ok(());
    }

    let Some(id) = ask_id(editor)? else {
        return Ok(());
    };

    let person = Record::new(first_name, last_name, id);
    println!("Added {person}");
    table.insert(person);
    Ok(())
}
