//! Line-based terminal front end
//!
//! Every input line is either a `:command` or the new contents of the search
//! box. Dialog answers are read from the same input.
//!
//! | Input | Action |
//! |-------|--------|
//! | `text` | search (an empty line clears the results) |
//! | `:pick CODE` | add a listed result |
//! | `:open N` / `:back` | open table N / back to the table list |
//! | `:new` | create a table |
//! | `:del [N]` / `:delall` | delete table N (default: the open one) / all tables |
//! | `:inc R` / `:dec R` / `:rm R` | change or remove row R (1-based) |
//! | `:note R` | comment row R |
//! | `:clear` | empty the open table |
//! | `:help` / `:quit` | |

use async_trait::async_trait;
use shared::{ChangeHint, ChangeKind, LineItem, TableId, TableSummary};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::desk::{Dialogs, OrderDesk, OrderView};
use crate::orders::SearchHit;

pub const HELP: &str = "\
text          search the menu (empty line clears)
:pick CODE    add a listed result
:open N       open table N
:back         back to the table list
:new          create a table
:del [N]      delete table N (default: the open one)
:delall       delete all tables
:inc R        row R +1
:dec R        row R -1
:rm R         remove row R
:note R       comment row R
:clear        empty the open table
:quit         exit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Pick(u32),
    Open(TableId),
    Back,
    NewTable,
    Delete(Option<TableId>),
    DeleteAll,
    Increment(usize),
    Decrement(usize),
    Remove(usize),
    Comment(usize),
    Clear,
    Help,
    Quit,
    /// Unparseable command, with the reason
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Search(line.trim().to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match name {
        "pick" => parse_arg(arg, "menu code", Command::Pick),
        "open" => parse_table(arg).map_or_else(Command::Invalid, Command::Open),
        "back" => Command::Back,
        "new" => Command::NewTable,
        "del" => match arg {
            None => Command::Delete(None),
            Some(_) => parse_table(arg).map_or_else(Command::Invalid, |t| Command::Delete(Some(t))),
        },
        "delall" => Command::DeleteAll,
        "inc" => parse_arg(arg, "row", Command::Increment),
        "dec" => parse_arg(arg, "row", Command::Decrement),
        "rm" => parse_arg(arg, "row", Command::Remove),
        "note" => parse_arg(arg, "row", Command::Comment),
        "clear" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => Command::Invalid(format!("unknown command :{}", other)),
    }
}

fn parse_arg<T: std::str::FromStr>(
    arg: Option<&str>,
    what: &str,
    build: impl FnOnce(T) -> Command,
) -> Command {
    match arg.map(str::parse::<T>) {
        Some(Ok(value)) => build(value),
        Some(Err(_)) => Command::Invalid(format!("invalid {}", what)),
        None => Command::Invalid(format!("missing {}", what)),
    }
}

fn parse_table(arg: Option<&str>) -> Result<TableId, String> {
    TableId::parse_input(arg.unwrap_or_default()).map_err(|e| e.to_string())
}

/// Run one command against the desk
///
/// Returns `false` when the user asked to quit.
pub async fn run_command<V: OrderView, D: Dialogs>(
    desk: &mut OrderDesk<V, D>,
    command: Command,
    out: &mut impl Write,
) -> bool {
    match command {
        Command::Search(query) => desk.type_query(&query),
        Command::Pick(code) => desk.pick_result(code),
        Command::Open(table_id) => desk.select_table(table_id),
        Command::Back => desk.back_to_tables(),
        Command::NewTable => {
            desk.create_table().await;
        }
        Command::Delete(table_id) => match table_id.or(desk.service().active_table()) {
            Some(table_id) => desk.delete_table(table_id).await,
            None => write_line(out, "no table open"),
        },
        Command::DeleteAll => desk.delete_all().await,
        Command::Increment(row)
        | Command::Decrement(row)
        | Command::Remove(row)
        | Command::Comment(row) => {
            let Some(uid) = desk.uid_at(row) else {
                write_line(out, &format!("no row {}", row));
                return true;
            };
            match command {
                Command::Increment(_) => desk.increment(&uid),
                Command::Decrement(_) => desk.decrement(&uid),
                Command::Remove(_) => desk.remove_item(&uid),
                _ => desk.edit_comment(&uid).await,
            }
        }
        Command::Clear => desk.clear_table().await,
        Command::Help => write_line(out, HELP),
        Command::Quit => return false,
        Command::Invalid(reason) => write_line(out, &reason),
    }
    true
}

fn write_line(out: &mut impl Write, text: &str) {
    if let Err(e) = writeln!(out, "{}", text) {
        tracing::warn!(error = %e, "Failed to write to terminal");
    }
}

/// Shared line input; the main loop and the dialogs read from it in turn
#[derive(Clone)]
pub struct LineReader {
    lines: Arc<Mutex<Lines<BufReader<Stdin>>>>,
}

impl LineReader {
    pub fn stdin() -> Self {
        Self {
            lines: Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines())),
        }
    }

    /// Next line, `None` on end of input
    ///
    /// Cancel safe, so it can sit in a `select!`.
    pub async fn next_line(&self) -> Option<String> {
        match self.lines.lock().await.next_line().await {
            Ok(line) => line,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input");
                None
            }
        }
    }
}

/// Dialogs answered on the terminal
///
/// `:cancel` or end of input dismisses a dialog.
pub struct TerminalDialogs {
    input: LineReader,
}

impl TerminalDialogs {
    pub fn new(input: LineReader) -> Self {
        Self { input }
    }

    async fn ask(&self, title: &str, message: &str, suffix: &str) -> Option<String> {
        println!("[{}] {}{}", title, message, suffix);
        let line = self.input.next_line().await?;
        let line = line.trim().to_string();
        (line != ":cancel").then_some(line)
    }
}

#[async_trait]
impl Dialogs for TerminalDialogs {
    async fn confirm(&self, title: &str, message: &str) -> Option<bool> {
        let answer = self.ask(title, message, " [y/n]").await?;
        match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => Some(true),
            "n" | "no" => Some(false),
            _ => None,
        }
    }

    async fn prompt(&self, title: &str, message: &str) -> Option<String> {
        self.ask(title, message, "").await
    }

    async fn alert(&self, title: &str, message: &str) {
        println!("[{}] {}", title, message);
    }
}

/// Plain-text rendering
pub struct TerminalView<W: Write> {
    out: W,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        write_line(&mut self.out, text);
    }
}

impl<W: Write> OrderView for TerminalView<W> {
    fn render_tables(&mut self, tables: &[TableSummary]) {
        if tables.is_empty() {
            self.line("(no tables, :new creates one)");
            return;
        }
        let cards: Vec<String> = tables
            .iter()
            .map(|t| {
                if t.has_items {
                    format!("[{}*]", t.table_id)
                } else {
                    format!("[{}]", t.table_id)
                }
            })
            .collect();
        self.line(&cards.join(" "));
    }

    fn render_order(&mut self, table_id: TableId, items: &[LineItem], hint: Option<&ChangeHint>) {
        self.line(&format!("== Table {} ==", table_id));
        if items.is_empty() {
            self.line("  (no order)");
            return;
        }
        for (row, item) in items.iter().enumerate() {
            let mark = match hint {
                Some(h) if h.uid == item.uid => match h.kind {
                    ChangeKind::New => '+',
                    ChangeKind::Update => '~',
                },
                _ => ' ',
            };
            let mut text = format!(
                "{}{:>3}. {:>3}x {} ({})",
                mark,
                row + 1,
                item.quantity,
                item.name,
                item.code
            );
            if item.has_comment() {
                text.push_str(&format!("  \"{}\"", item.comment));
            }
            self.line(&text);
        }
    }

    fn render_results(&mut self, hits: &[SearchHit]) {
        if hits.is_empty() {
            self.line("  (no matches)");
            return;
        }
        for hit in hits {
            let mut text = format!("  {:>4}  {}", hit.item.code, hit.item.name);
            if hit.in_order > 0 {
                text.push_str(&format!("  [{}x]", hit.in_order));
            }
            self.line(&text);
        }
    }

    fn clear_results(&mut self) {}

    fn show_table_list(&mut self) {
        self.line("== Tables ==");
    }

    fn notice(&mut self, message: &str) {
        self.line(&format!("! {}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MenuItem;

    fn table(n: u32) -> TableId {
        TableId::new(n).unwrap()
    }

    #[test]
    fn test_parse_search_lines() {
        assert_eq!(parse_command("203"), Command::Search("203".into()));
        assert_eq!(parse_command("  pizza \n"), Command::Search("pizza".into()));
        assert_eq!(parse_command(""), Command::Search(String::new()));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command(":open 5"), Command::Open(table(5)));
        assert_eq!(parse_command(":pick 300"), Command::Pick(300));
        assert_eq!(parse_command(":del"), Command::Delete(None));
        assert_eq!(parse_command(":del 3"), Command::Delete(Some(table(3))));
        assert_eq!(parse_command(":inc 2"), Command::Increment(2));
        assert_eq!(parse_command(":note 1"), Command::Comment(1));
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":back"), Command::Back);
    }

    #[test]
    fn test_parse_invalid_commands() {
        assert_eq!(
            parse_command(":open 0"),
            Command::Invalid("Table number must be greater than 0".into())
        );
        assert_eq!(parse_command(":open"), Command::Invalid("Table number is required".into()));
        assert_eq!(parse_command(":rm x"), Command::Invalid("invalid row".into()));
        assert_eq!(parse_command(":pick"), Command::Invalid("missing menu code".into()));
        assert!(matches!(parse_command(":dance"), Command::Invalid(_)));
    }

    #[test]
    fn test_render_order_marks_hinted_row() {
        let mut view = TerminalView::new(Vec::new());
        let item = LineItem {
            comment: "no ice".into(),
            ..LineItem::from_menu(&MenuItem::new(62, "COCA COLA 0,2l"))
        };
        let hint = ChangeHint::update(item.uid.clone());

        view.render_order(table(3), &[item], Some(&hint));

        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.contains("== Table 3 =="));
        assert!(text.contains("~  1.   1x COCA COLA 0,2l (62)  \"no ice\""));
    }

    #[test]
    fn test_render_tables_flags_items() {
        let mut view = TerminalView::new(Vec::new());
        view.render_tables(&[
            TableSummary {
                table_id: table(1),
                has_items: true,
            },
            TableSummary {
                table_id: table(4),
                has_items: false,
            },
        ]);

        let text = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(text.trim(), "[1*] [4]");
    }
}
