use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use relative_path::RelativePathBuf;
use roadpost_config::Config;
use roadpost_engine::{FileTree, FileTreeItem, io, parse_text};
use std::{env, io::stdout, path::PathBuf, process};

struct App {
    content_path: PathBuf,
    file_tree: FileTree,
    tree_items: Vec<FileTreeItem>,
    file_list_state: ListState,
    preview: Vec<String>,
}

impl App {
    fn new(content_path: PathBuf) -> Result<Self> {
        let file_tree = io::build_file_tree(&content_path)?;
        let tree_items = file_tree.get_items();

        let mut app = Self {
            content_path,
            file_tree,
            tree_items,
            file_list_state: ListState::default(),
            preview: Vec::new(),
        };

        // Select first item if available
        if !app.tree_items.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_preview_for_selection();
        }

        Ok(app)
    }

    fn next_item(&mut self) {
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.tree_items.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_preview_for_selection();
    }

    fn previous_item(&mut self) {
        let i = match self.file_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.tree_items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_preview_for_selection();
    }

    fn update_preview_for_selection(&mut self) {
        if let Some(index) = self.file_list_state.selected()
            && let Some(item) = self.tree_items.get(index)
        {
            if item.node.is_folder {
                self.preview = vec![
                    format!("📁 {}", item.node.name),
                    String::new(),
                    "Press Enter/Space to toggle, → to expand, ← to collapse".to_string(),
                ];
            } else if let Some(ref post) = item.node.post {
                match io::read_post(post.relative_path(), &self.content_path) {
                    Ok(content) => {
                        let blocks = parse_text(&content);
                        self.preview = preview_lines(&blocks);
                    }
                    Err(e) => {
                        self.preview = vec![format!("Error reading post: {e}")];
                    }
                }
            }
        }
    }

    fn activate_selected_item(&mut self) {
        if let Some(index) = self.file_list_state.selected()
            && let Some(item) = self.tree_items.get(index)
            && item.node.is_folder
        {
            self.toggle_folder(item.node.relative_path.clone());
            self.update_preview_for_selection();
        }
        // Posts are already loaded by update_preview_for_selection
    }

    fn toggle_folder(&mut self, relative_path: RelativePathBuf) {
        self.file_tree.toggle_folder(&relative_path);
        self.tree_items = self.file_tree.get_items();
    }

    fn expand_selected_folder(&mut self) {
        if let Some(index) = self.file_list_state.selected()
            && let Some(item) = self.tree_items.get(index)
            && item.node.is_folder
            && !item.node.is_expanded
        {
            self.file_tree.expand_folder(&item.node.relative_path);
            self.tree_items = self.file_tree.get_items();
            self.update_preview_for_selection();
        }
    }

    fn collapse_selected_folder(&mut self) {
        if let Some(index) = self.file_list_state.selected()
            && let Some(item) = self.tree_items.get(index)
            && item.node.is_folder
            && item.node.is_expanded
        {
            self.file_tree.collapse_folder(&item.node.relative_path);
            self.tree_items = self.file_tree.get_items();
            self.update_preview_for_selection();
        }
    }
}

/// Flatten parsed blocks into preview lines for the content pane.
fn preview_lines(blocks: &[roadpost_engine::Block]) -> Vec<String> {
    use roadpost_engine::Block;

    let mut lines = Vec::new();
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let prefix = "#".repeat(level.depth() as usize);
                lines.push(format!("{prefix} {text}"));
                lines.push(String::new());
            }
            Block::Paragraph { text } => {
                lines.push(text.clone());
                lines.push(String::new());
            }
            Block::UnorderedList { items } => {
                for item in items {
                    lines.push(format!("• {item}"));
                }
                lines.push(String::new());
            }
            Block::OrderedList { items } => {
                for (n, item) in items.iter().enumerate() {
                    lines.push(format!("{}. {item}", n + 1));
                }
                lines.push(String::new());
            }
        }
    }
    lines
}

fn main() -> Result<()> {
    // Determine content path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let content_path;
    let from_config;

    if args.len() == 2 {
        content_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                content_path = config.content_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No content path provided and no config file found");
                eprintln!("Usage: {} <content-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <content-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [content-folder-path]", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_content_dir(&content_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Content path '{}'{} is invalid: {e}",
            content_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(content_path)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_item(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_item(),
                KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected_item(),
                KeyCode::Right => app.expand_selected_folder(),
                KeyCode::Left => app.collapse_selected_folder(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Post list panel
    let file_items: Vec<ListItem> = app
        .tree_items
        .iter()
        .map(|item| {
            let indent = "  ".repeat(item.depth);
            let icon = if item.node.is_folder {
                if item.node.is_expanded {
                    "📂 "
                } else {
                    "📁 "
                }
            } else {
                "📄 "
            };
            let label = item
                .node
                .post
                .as_ref()
                .map(|post| post.title().to_string())
                .unwrap_or_else(|| item.node.name.clone());
            let display_text = format!("{indent}{icon}{label}");
            ListItem::new(vec![Line::from(vec![Span::raw(display_text)])])
        })
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Posts"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Preview panel
    let preview_text = if app.preview.is_empty() {
        vec![Line::from("Select a post to preview it")]
    } else {
        app.preview
            .iter()
            .map(|line| Line::from(vec![Span::raw(line.clone())]))
            .collect()
    };

    let preview = Paragraph::new(preview_text)
        .block(Block::default().borders(Borders::ALL).title("Preview"))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(preview, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("Enter/Space: Toggle | →: Expand | ←: Collapse"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
