mod app;
mod calendar;
mod habits;
mod help;
mod profile;
mod provider;
mod stickers;
mod store;
mod theme;
use crate::app::App;
use crate::calendar::CalendarState;
use crate::profile::{Identity, Provider, UserProfile};
use crate::store::Book;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::{
    format_description::BorrowedFormatItem, macros::format_description, Date, OffsetDateTime,
};

static YMD_FMT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

const DEFAULT_FILE: &str = "stickercal.json";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run { date: Option<Date>, file: PathBuf },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('f') | Arg::Long("file") => {
                    file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            date,
            file: file.unwrap_or_else(|| PathBuf::from(DEFAULT_FILE)),
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { date, file } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let mut book = Book::load(&file)?;
                // Write-is-an-upsert, as with the hosted profile store: a
                // fresh book gets a profile with default settings.
                let profile = UserProfile::upsert(
                    book.profile.take(),
                    &Identity::local(),
                    Provider::Email,
                    OffsetDateTime::now_utc(),
                );
                let week_start = profile.settings.week_starts_on;
                book.profile = Some(profile);
                let mut cal = CalendarState::new(today, week_start);
                if let Some(d) = date {
                    cal = cal.start_date(d);
                }
                let book = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let mut app = App::new(cal, book);
                    app.run(&mut terminal)?;
                    Ok(app.into_book())
                })?;
                book.save(&file)?;
                Ok(())
            }
            Command::Help => {
                println!("Usage: stickercal [-f FILE] [YYYY-MM-DD]");
                println!();
                println!("Terminal habit calendar for tracking daily sticker records");
                println!();
                println!("Options:");
                println!("  -f FILE, --file FILE  Read & write the sticker book in FILE");
                println!("                        [default: {DEFAULT_FILE}]");
                println!("  -h, --help            Display this help message and exit");
                println!("  -V, --version         Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
