//! an executable to query shortest routes between locations
//! example usage:
//! rutas --csv "data/rutas.csv"                          runs the interactive menu
//! rutas --csv "data/rutas.csv" route --from 1 --to 3
//! rutas --csv "data/rutas.csv" neighbors --of 2
//! rutas --csv "data/rutas.csv" --dot kanto dot
//! rutas --csv "data/rutas.csv" --locations "data/locations.csv" table
//!
//! Without --locations the builtin table of locations is used.
//! Logging is driven by RUST_LOG.



use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{anyhow, Context};
use clap::{Arg, ArgMatches, Command, arg};

use rutas::prelude::*;

static DEFAULT_CSV : &str = "data/rutas.csv";


// parse an index argument of a subcommand
fn parse_index(matches : &ArgMatches, name : &str) -> Result<u32, anyhow::Error> {
    match matches.value_of(name) {
        Some(str) => {
            str.parse::<u32>().map_err(|_| anyhow!("error parsing {}, expecting a location index", name))
        },
        _   => { Err(anyhow!("missing {}", name)) },
    }
} // end of parse_index


fn parse_delimiter(matches : &ArgMatches) -> Result<LoadParams, anyhow::Error> {
    match matches.value_of("delimiter") {
        Some(str) => {
            let bytes = str.as_bytes();
            if bytes.len() != 1 {
                return Err(anyhow!("delimiter must be a single ascii character, got {:?}", str));
            }
            Ok(LoadParams::new(bytes[0]))
        },
        None => Ok(LoadParams::default()),
    }
} // end of parse_delimiter


// prints prompt, reads a line and parses a number. None at end of input
fn ask_number<R : BufRead>(input : &mut R, prompt : &str) -> Result<Option<u32>, anyhow::Error> {
    loop {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<u32>() {
            Ok(n) => { return Ok(Some(n)); },
            Err(_) => { println!("please type a number"); },
        }
    }
} // end of ask_number


// the interactive session, ends on option 4 or end of input
fn run_menu(query : &RouteQuery, output : &Output) -> Result<(), anyhow::Error> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let menu = "\nWELCOME TO YOUR ROUTE SYSTEM!\nChoose an option:\n1. Visualize possible routes\n2. Find shortest route\n3. Show neighbours\n4. Quit\n";
    let locations = query.get_locations().menu();
    loop {
        let option = match ask_number(&mut input, menu)? {
            Some(option) => option,
            None => { break; },
        };
        match option {
            1 => {
                match output.dump(query.get_graph()) {
                    Ok(path) => println!("graph written in {}, render it with circo -Tpng", path.display()),
                    Err(e) => println!("error: {}", e),
                }
            },
            2 => {
                let origin = match ask_number(&mut input, &format!("Choose your station:\n{}", locations))? {
                    Some(i) => i,
                    None => { break; },
                };
                let destination = match ask_number(&mut input, &format!("Choose your destination:\n{}", locations))? {
                    Some(i) => i,
                    None => { break; },
                };
                println!("{}", query.answer(origin, destination));
            },
            3 => {
                let index = match ask_number(&mut input, &format!("Choose a station:\n{}", locations))? {
                    Some(i) => i,
                    None => { break; },
                };
                println!("{}", query.answer_neighbors(index));
            },
            4 => { break; },
            _ => { println!("unknown option {}", option); },
        }
    }
    Ok(())
} // end of run_menu


// prints distances from every location to every other
fn print_table(query : &RouteQuery) -> Result<(), anyhow::Error> {
    let table = all_pairs(query.get_graph())?;
    for (index, origin) in query.get_locations().iter() {
        let paths = match table.get(origin) {
            Some(paths) => paths,
            None => {
                println!("{}. {} : not in graph", index, origin);
                continue;
            },
        };
        let row : Vec<String> = query.get_locations().iter()
                .map(|(_, destination)| {
                    let d = paths.get_distance(destination).map_or(Distance::Unreachable, Distance::from_value);
                    format!("{} {}", destination, d)
                })
                .collect();
        println!("{}. {} : {}", index, origin, row.join(", "));
    }
    Ok(())
} // end of print_table



pub fn main() -> Result<(), anyhow::Error> {
    //
    lazy_static::initialize(&rutas::LOG);
    log::info!("logger initialized");
    //
    let matches = Command::new("rutas")
        .arg(Arg::new("csvfile")
            .long("csv")
            .takes_value(true)
            .required(false)
            .help("csv file of routes: origin, destination, cost. default data/rutas.csv"))
        .arg(Arg::new("locations")
            .long("locations")
            .takes_value(true)
            .required(false)
            .help("csv file of locations: index, name. default is builtin table"))
        .arg(Arg::new("delimiter")
            .long("delimiter")
            .takes_value(true)
            .required(false)
            .help("field separator of csv files, default ','"))
        .arg(Arg::new("dot")
            .long("dot")
            .takes_value(true)
            .required(false)
            .help("name of dot file for visualization, default rutas.dot"))
        .subcommand(Command::new("route")
            .arg_required_else_help(true)
            .args(&[
                arg!(--from <from> "index of origin location"),
                arg!(--to <to> "index of destination location"),
            ])
        )
        .subcommand(Command::new("neighbors")
            .arg_required_else_help(true)
            .args(&[
                arg!(--of <of> "index of location"),
            ])
        )
        .subcommand(Command::new("dot")
            .about("dumps graph in dot format"))
        .subcommand(Command::new("table")
            .about("shortest distances between all locations"))
    .get_matches();
    //
    let params = parse_delimiter(&matches)?;
    let csvfile = matches.value_of("csvfile").unwrap_or(DEFAULT_CSV);
    let graph = graph_from_csv_file(Path::new(csvfile), &params)
        .with_context(|| format!("loading routes from {}", csvfile))?;
    let locations = match matches.value_of("locations") {
        Some(file) => locations_from_csv_file(Path::new(file), &params)
                        .with_context(|| format!("loading locations from {}", file))?,
        None => LocationTable::default(),
    };
    log::info!("{} locations, graph has {} nodes and {} edges", locations.len(), graph.nb_nodes(), graph.nb_edges());
    let output = Output::new(Format::DOT, &matches.value_of("dot").map(String::from));
    let query = RouteQuery::new(&graph, &locations);
    //
    match matches.subcommand() {
        Some(("route", sub_m)) => {
            let origin = parse_index(sub_m, "from")?;
            let destination = parse_index(sub_m, "to")?;
            println!("{}", query.answer(origin, destination));
        },
        Some(("neighbors", sub_m)) => {
            let index = parse_index(sub_m, "of")?;
            println!("{}", query.answer_neighbors(index));
        },
        Some(("dot", _)) => {
            let path = output.dump(&graph)?;
            println!("graph written in {}", path.display());
        },
        Some(("table", _)) => { print_table(&query)?; },
        _ => { run_menu(&query, &output)?; },
    }
    //
    Ok(())
} // end of main
