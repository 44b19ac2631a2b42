use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Write};
use std::time::Duration;
use termion::input::MouseTerminal;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use htmlquill::config::Config;
use htmlquill::document::node::{Block, BlockKind, MarkSet, Node, TextRun};
use htmlquill::document::tree::Document;
use htmlquill::editor::mode::EditorMode;
use htmlquill::editor::state::EditorState;
use htmlquill::file::loader::{load_document, load_document_from_stdin};
use htmlquill::input::InputHandler;
use htmlquill::theme::get_builtin_theme;
use htmlquill::ui::UI;

/// HTMLQuill - A terminal-based structural rich text editor
#[derive(Parser)]
#[command(name = "htmlquill")]
#[command(version)]
#[command(about = "A terminal-based structural rich text editor", long_about = None)]
struct Cli {
    /// File to edit (omit to read from stdin if piped, or open a demo
    /// document if interactive). A path that does not exist yet starts an
    /// empty document saved to that path.
    file: Option<String>,

    /// Theme name (default: default-dark)
    #[arg(short, long, default_value = "default-dark")]
    theme: String,

    /// Open read-only: navigation works, every mutation is rejected
    #[arg(long)]
    readonly: bool,
}

/// Set up a panic hook that restores the terminal before displaying panic
/// information.
///
/// This ensures that panics are visible even when the terminal is in raw
/// mode with alternate screen. Without this, panic messages would be hidden
/// or garbled, making debugging very difficult.
fn setup_panic_hook() {
    use std::panic;

    // Take the default panic hook so we can call it after restoration
    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal to normal state
        // Use stderr to avoid interfering with stdout pipes
        use std::io::Write;

        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

/// Builds the demo document shown when htmlquill starts interactively with
/// no file.
fn demo_document() -> Document {
    let bold = MarkSet {
        bold: true,
        ..MarkSet::default()
    };
    let code = MarkSet {
        code: true,
        ..MarkSet::default()
    };

    let mut title = Block::paragraph("Welcome to htmlquill");
    title.kind = BlockKind::HeadingOne;

    let intro = Block {
        kind: BlockKind::Paragraph,
        align: None,
        children: vec![
            Node::Text(TextRun::new("Format with the toolbar or chords: ")),
            Node::Text(TextRun::with_marks("Ctrl+B", code)),
            Node::Text(TextRun::new(" makes text ")),
            Node::Text(TextRun::with_marks("bold", bold)),
            Node::Text(TextRun::new(". Press F1 for all keys.")),
        ],
    };

    let mut item_one = Block::paragraph("Alt+8 turns blocks into a list");
    item_one.kind = BlockKind::ListItem;
    let mut item_two = Block::paragraph("Ctrl+S saves the document as HTML");
    item_two.kind = BlockKind::ListItem;
    let mut list = Block::new(BlockKind::BulletedList);
    list.children = vec![Node::Block(item_one), Node::Block(item_two)];

    Document::new(vec![
        Node::Block(title),
        Node::Block(intro),
        Node::Block(list),
    ])
}

fn main() -> Result<()> {
    // Set up panic hook to restore terminal before showing panic info
    setup_panic_hook();

    let cli = Cli::parse();

    // Load content BEFORE terminal setup (stdin might carry piped content,
    // so it must be read before taking over the terminal)
    let (document, filename, stdin_was_piped) = if let Some(file_path) = cli.file {
        let document = if std::path::Path::new(&file_path).exists() {
            load_document(&file_path)?
        } else {
            // A fresh file starts as one empty paragraph
            Document::new(vec![Node::Block(Block::paragraph(""))])
        };
        (document, Some(file_path), false)
    } else if !io::stdin().is_terminal() {
        // Stdin is piped - read content from it
        let document = load_document_from_stdin()?;
        (document, None, true)
    } else {
        // Interactive mode with no file - open the demo document
        (demo_document(), None, false)
    };

    // Setup terminal
    // Termion can use /dev/tty directly when stdin is piped
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = MouseTerminal::from(stdout);
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Load config; the CLI theme flag overrides the config theme
    let config = Config::load();
    let theme_name = if !cli.theme.is_empty() {
        &cli.theme
    } else {
        &config.theme
    };

    let theme = get_builtin_theme(theme_name).unwrap_or_else(|| {
        eprintln!(
            "Warning: Theme '{}' not found (available: {}), using default-dark",
            theme_name,
            htmlquill::theme::list_builtin_themes().join(", ")
        );
        get_builtin_theme("default-dark").unwrap()
    });
    let ui = UI::new(theme);

    let mut input_handler = if stdin_was_piped {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    } else {
        InputHandler::new()
    };

    let mut state = EditorState::new(document);
    if let Some(name) = filename {
        state.set_filename(name);
    }
    if cli.readonly {
        state.set_mode(EditorMode::View);
    }

    // Main event loop
    let result = run_event_loop(&mut terminal, &ui, &mut input_handler, &mut state, &config);

    // Cleanup
    // Termion restores the terminal through Drop guards; just re-show the
    // cursor before exiting
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    state: &mut EditorState,
    config: &Config,
) -> Result<()> {
    loop {
        // Render UI
        ui.render(terminal, state, config)?;

        // Handle input
        if let Some(event) = input_handler.poll_event(Duration::from_millis(100))? {
            let should_quit = input_handler.handle_event(event, state, config)?;
            if should_quit {
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmlquill::html::serializer::serialize_document;

    #[test]
    fn test_demo_document_serializes() {
        let doc = demo_document();
        let html = serialize_document(&doc);
        assert!(html.starts_with("<h1>Welcome to htmlquill</h1>"));
        assert!(html.contains("<ul><li>"));
        assert!(html.contains("<strong>bold</strong>"));
    }
}
