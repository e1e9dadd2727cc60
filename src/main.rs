pub mod challenge;
pub mod content;
pub mod render;
pub mod runtime;
pub mod selection;
pub mod session;
pub mod ui;

use crate::{
    content::Tables,
    runtime::{CrosstermEventSource, Runner, UiEvent},
    selection::VerbSelection,
    session::Session,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use itertools::Itertools;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

const TICK_RATE_MS: u64 = 100;

/// terminal hebrew verb practice
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Practice Hebrew verbs in context: pick the verbs to drill, translate the generated English sentence, and reveal the Hebrew on demand."
)]
pub struct Cli {
    /// verbs to practice, comma separated (defaults to the first verb in the catalog)
    #[clap(short = 'v', long, value_delimiter = ',')]
    verbs: Vec<String>,

    /// print the verb catalog and exit
    #[clap(long)]
    list_verbs: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Practice,
    VerbPicker,
}

#[derive(Debug, Default)]
pub struct PickerState {
    pub cursor: usize,
}

#[derive(Debug)]
pub struct App {
    pub session: Session,
    pub state: AppState,
    pub picker: PickerState,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            state: AppState::Practice,
            picker: PickerState::default(),
        }
    }
}

fn build_selection(verbs: &[String], tables: &Tables) -> Result<VerbSelection, String> {
    if verbs.is_empty() {
        return Ok(VerbSelection::new(tables.verbs[0].name.clone()));
    }

    for name in verbs {
        if tables.verb(name).is_none() {
            return Err(format!(
                "unknown verb '{}' (catalog: {})",
                name,
                tables.verbs.iter().map(|v| &v.name).join(", ")
            ));
        }
    }

    let mut selection = VerbSelection::new(verbs[0].clone());
    for name in &verbs[1..] {
        // A verb named twice on the command line is just selected once.
        let _ = selection.add(name.clone());
    }
    Ok(selection)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let tables = Tables::load();
    if let Err(err) = tables.validate() {
        eprintln!("content tables failed validation: {err}");
        std::process::exit(1);
    }

    if cli.list_verbs {
        for verb in &tables.verbs {
            println!("{}", verb.name);
        }
        return Ok(());
    }

    let selection = match build_selection(&cli.verbs, &tables) {
        Ok(selection) => selection,
        Err(msg) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::InvalidValue, msg).exit();
        }
    };

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Session::new(tables, selection));
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let events = CrosstermEventSource::new();
    let runner = Runner::new(events, Duration::from_millis(TICK_RATE_MS));

    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            UiEvent::Tick => {}
            UiEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            UiEvent::Key(key) => {
                if handle_key(app, key) == Flow::Quit {
                    break;
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

fn handle_key(app: &mut App, key: KeyEvent) -> Flow {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Flow::Quit;
    }

    match app.state {
        AppState::Practice => match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char(' ') | KeyCode::Char('a') => {
                app.session.toggle_answer();
            }
            KeyCode::Char('n') | KeyCode::Right => {
                app.session.next_challenge();
            }
            KeyCode::Char('v') => {
                app.picker.cursor = 0;
                app.state = AppState::VerbPicker;
            }
            _ => {}
        },
        AppState::VerbPicker => match key.code {
            KeyCode::Esc | KeyCode::Char('b') => {
                app.state = AppState::Practice;
            }
            KeyCode::Up => {
                app.picker.cursor = app.picker.cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if app.picker.cursor + 1 < app.session.tables().verbs.len() {
                    app.picker.cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                toggle_verb_under_cursor(app);
            }
            _ => {}
        },
    }

    Flow::Continue
}

// Rejected selection changes (duplicate add, removing the last verb) are
// deliberate no-ops at this boundary.
fn toggle_verb_under_cursor(app: &mut App) {
    let name = app.session.tables().verbs[app.picker.cursor].name.clone();
    if app.session.selection().contains(&name) {
        let _ = app.session.remove_verb(&name);
    } else {
        let _ = app.session.add_verb(&name);
    }
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
