extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use cf_archiver::{downloader::Event, run, Config};
use clap::{crate_description, crate_name, Arg, ArgMatches, Command};
use pretty_env_logger::init_timed;
use std::{io::Write, process};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;

#[allow(unused_must_use)]
fn report(stdout: &mut StandardStream, event: Event<'_>) {
    match event {
        Event::Catalog { total, finished } => write_info!(
            stdout,
            "Info",
            "Successfully loaded {} contests ({} finished)",
            total,
            finished
        ),
        Event::Submissions(count) => {
            write_info!(stdout, "Info", "Successfully loaded {} submissions", count)
        }
        Event::Saved {
            submission,
            contest,
            path,
        } => write_progress!(
            stdout,
            "Saved",
            "Processing problem [{}] from {} -> {}",
            submission.problem.index,
            contest.name,
            path.display()
        ),
        Event::Failed {
            submission,
            contest,
            error,
        } => write_error!(
            stdout,
            "Error",
            "Error downloading problem [{}] from {}: {}",
            submission.problem.index,
            contest.name,
            error
        ),
        Event::UnknownContest(_) | Event::NotAccepted(_) => (),
    }
    stdout.reset();
}

fn app() -> Command<'static> {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("handle")
                .short('a')
                .long("handle")
                .takes_value(true)
                .value_name("HANDLE")
                .help("Contestant handle"),
        )
}

/// An empty handle counts as absent.
fn handle(matches: &ArgMatches) -> Option<String> {
    matches
        .value_of("handle")
        .filter(|h| !h.is_empty())
        .map(str::to_owned)
}

#[allow(unused_must_use)]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_timed();
    let mut app = app();
    let handle = match handle(&app.get_matches_mut()) {
        Some(v) => v,
        None => {
            app.print_help();
            println!();
            process::exit(0);
        }
    };

    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let config = Config::default();
    write_info!(
        &mut stdout,
        "Info",
        "Archiving accepted solutions of {} into {}",
        handle,
        config.output.display()
    );
    stdout.reset();
    let result = run(&config, &handle, |event| report(&mut stdout, event)).await;
    match result {
        Ok(summary) => write_ok!(
            &mut stdout,
            "Finish",
            "Finished downloading everything! {} saved, {} failed",
            summary.saved,
            summary.failed
        ),
        Err(e) => {
            write_error!(&mut stdout, "Fatal", "{}", e);
            stdout.reset();
            process::exit(1);
        }
    }
    stdout.reset();
}
