//! sectionjump: A sectioned contact list with jump-to-section navigation.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sectionjump::app_state::{self, AppState, CommandOutcome};
use sectionjump::error::Result;
use sectionjump::model::ContactListModel;
use sectionjump::sectioning::favorites::FAVORITES_LABEL;
use sectionjump::sectioning::SectionProperty;
use sectionjump::{config, input, ui};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sectionjump")]
#[command(about = "Jump-to-section navigation for sorted contact lists", long_about = None)]
struct Args {
    /// Contact files or directories to load
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Property to section contacts by
    #[arg(long, short = 's', value_enum)]
    section: Option<SectionProperty>,

    /// Print the section index as JSON and exit
    #[arg(long)]
    print_index: bool,
}

fn main() -> Result<()> {
    sectionjump::init_tracing();

    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    let sectioning = args.section.unwrap_or_else(|| cfg.section_property());

    let files = input::find_contact_files(args.paths, &cfg.file_extensions)?;
    let contacts = input::load_all(&files);

    let app = AppState::new(ContactListModel::new(contacts, sectioning));

    if args.print_index {
        let json = app.index.to_json().map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    if app.model.is_empty() {
        eprintln!("No contacts found");
        return Ok(());
    }

    run_tui(app)
}

fn run_tui(mut app: AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            match app.current_view {
                app_state::View::List => match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Char(':') => {
                        app.current_view = app_state::View::Command;
                        app.command_buffer.clear();
                        app.message = None;
                    }
                    KeyCode::Char('*') => {
                        app.jump_to_section(FAVORITES_LABEL);
                    }
                    KeyCode::Char('#') => {
                        app.jump_to_section("#");
                    }
                    KeyCode::Char(c) if c.is_alphabetic() => {
                        // Rail letters are uppercase labels
                        app.jump_to_section(&c.to_uppercase().to_string());
                    }
                    KeyCode::Up => app.select_prev(),
                    KeyCode::Down => app.select_next(),
                    KeyCode::PageUp => {
                        if let Some(prev) = app.navigate_to_prev_section() {
                            app.selected = prev;
                        }
                    }
                    KeyCode::PageDown => {
                        if let Some(next) = app.navigate_to_next_section() {
                            app.selected = next;
                        }
                    }
                    KeyCode::Home => {
                        if let Some(first) = app.navigate_to_first() {
                            app.selected = first;
                        }
                    }
                    KeyCode::End => {
                        if let Some(last) = app.navigate_to_last() {
                            app.selected = last;
                        }
                    }
                    _ => {}
                },
                app_state::View::Command => match key.code {
                    KeyCode::Char(c) => {
                        app.command_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.command_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let cmd = std::mem::take(&mut app.command_buffer);
                        app.current_view = app_state::View::List;
                        if app.run_command(&cmd) == CommandOutcome::Quit {
                            return Ok(());
                        }
                    }
                    KeyCode::Esc => {
                        app.current_view = app_state::View::List;
                        app.command_buffer.clear();
                    }
                    _ => {}
                },
            }
        }
    }
}
