//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed at the end of the turn.

use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::loader::help::HelpEntry;
use crate::style::{GameStyle, indented_block, normal_block};

const ICON_SUCCESS: &str = "\u{2611}"; // ✔
const ICON_FAILURE: &str = "\u{274C}"; // ✖
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_TRIGGER: &str = "⚡︎"; // U+26A1 U+FE0E
const ICON_NEGATIVE: &str = "➖";
const ICON_CELEBRATE: &str = "🎉"; // U+1F389
const ICON_ENGINE: &str = "⚙";
const ICON_DEATH: &str = "☠";

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewEntry>,
    pub sequence: usize,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.push_with_custom_priority(item, None);
    }

    /// Push a `ViewItem` honoring an optional custom priority override.
    pub fn push_with_custom_priority(&mut self, item: ViewItem, priority: Option<isize>) {
        self.items.push(ViewEntry {
            section: item.section(),
            priority: item.default_priority(),
            custom_priority: priority,
            view_item: item,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// Iterate over the raw `ViewItem`s queued for this frame, in push order.
    pub fn view_items(&self) -> impl Iterator<Item = &ViewItem> {
        self.items.iter().map(|entry| &entry.view_item)
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        if let Some(msg) = self.items.iter().find_map(|i| match &i.view_item {
            ViewItem::TransitionMessage(msg) => Some(msg),
            _ => None,
        }) {
            println!("\n{}", fill(msg.as_str(), normal_block()).transition_style());
        }

        let has = |section: Section| self.items.iter().any(|i| i.section == section);
        if has(Section::Environment) {
            println!("{:.>width$}\n", "scene".section_style(), width = self.width);
            self.environment();
        }
        if has(Section::DirectResult) {
            println!("{:.>width$}\n", "results".section_style(), width = self.width);
            self.direct_results();
        }
        if has(Section::WorldResponse) {
            println!("{:.>width$}\n", "labyrinth".section_style(), width = self.width);
            self.world_reaction();
        }
        if has(Section::System) {
            println!("{:.>width$}\n", "game".section_style(), width = self.width);
            self.system();
        }

        // clear the buffer for the next turn
        self.items.clear();

        // create a little space before the next prompt
        println!();
    }

    // SECTION AGGREGATORS START HERE --------------------

    fn environment(&self) {
        self.room_description();
        self.room_item_list();
        self.room_exit_list();
        self.room_puzzle_hint();
    }

    fn direct_results(&self) {
        self.inventory();
        for entry in &self.items {
            match &entry.view_item {
                ViewItem::ActionSuccess(msg) => {
                    println!("{}", fill(&format!("{} {msg}", ICON_SUCCESS.bright_green()), normal_block()));
                },
                ViewItem::ActionFailure(msg) => {
                    println!("{}", fill(&format!("{} {msg}", ICON_FAILURE.bright_red()), normal_block()));
                },
                ViewItem::Error(msg) => {
                    println!("{}", fill(&format!("{} {}", ICON_ERROR.bright_red(), msg.error_style()), normal_block()));
                },
                _ => {},
            }
        }
    }

    fn world_reaction(&self) {
        for entry in self.world_entries_sorted() {
            let line = match &entry.view_item {
                ViewItem::TriggeredEvent(msg) => format!("{} {}", ICON_TRIGGER.yellow(), msg.triggered_style()),
                ViewItem::TrapSprung(msg) => format!("{} {}", ICON_TRIGGER.bright_red(), msg.trap_style()),
                ViewItem::ItemLost(item) => format!(
                    "{} The {} slips from your grasp and is gone.",
                    ICON_NEGATIVE.bright_red(),
                    item.item_style()
                ),
                ViewItem::GameWon(msg) => format!("{} {}", ICON_CELEBRATE, msg.bold().bright_yellow()),
                ViewItem::GameLost(msg) => format!("{} {}", ICON_DEATH.bright_red(), msg.bold().bright_red()),
                _ => continue,
            };
            println!("{}", fill(&line, normal_block()));
        }
    }

    /// World reaction entries in display order: by effective priority, then push order.
    fn world_entries_sorted(&self) -> Vec<&ViewEntry> {
        let mut entries: Vec<&ViewEntry> = self
            .items
            .iter()
            .filter(|entry| entry.section == Section::WorldResponse)
            .collect();
        entries.sort_by_key(|entry| (entry.effective_priority(), entry.sequence));
        entries
    }

    fn system(&self) {
        for entry in &self.items {
            match &entry.view_item {
                ViewItem::Help { basic_text, commands } => {
                    println!("{}\n", fill(basic_text, normal_block()).description_style());
                    println!("{}:", "Commands".subheading_style());
                    for entry in commands {
                        if entry.aliases.is_empty() {
                            println!("  {:<18} {}", entry.usage.as_str().item_style(), entry.summary);
                        } else {
                            println!(
                                "  {:<18} {} (also: {})",
                                entry.usage.as_str().item_style(),
                                entry.summary,
                                entry.aliases.join(", ")
                            );
                        }
                    }
                },
                ViewItem::QuitSummary { steps, items } => {
                    println!("{:^width$}", " GAME OVER ".black().on_yellow(), width = self.width);
                    println!("{:10} {steps}", "Steps:");
                    println!("{:10} {items}", "Carried:");
                },
                ViewItem::EngineMessage(msg) => {
                    println!("{} {}", ICON_ENGINE.dimmed(), msg.italic());
                },
                _ => {},
            }
        }
    }

    fn inventory(&self) {
        if let Some(ViewItem::Inventory(items)) = self.items.iter().find_map(|i| match i.view_item {
            ViewItem::Inventory(_) => Some(&i.view_item),
            _ => None,
        }) {
            println!("{}:", "Inventory".subheading_style());
            if items.is_empty() {
                println!("   {}", "Your inventory is empty.".italic().dimmed());
            } else {
                for item in items {
                    println!("   - {}", item.item_style());
                }
            }
        }
    }

    fn room_description(&self) {
        if let Some(ViewItem::RoomDescription { name, description }) = self.items.iter().find_map(|i| match i.view_item {
            ViewItem::RoomDescription { .. } => Some(&i.view_item),
            _ => None,
        }) {
            println!("{:^width$}", format!("== {name} ==").room_titlebar_style(), width = self.width);
            println!("{}\n", fill(description, normal_block()).description_style());
        }
    }

    fn room_item_list(&self) {
        if let Some(ViewItem::RoomItems(names)) = self.items.iter().find_map(|i| match i.view_item {
            ViewItem::RoomItems(_) => Some(&i.view_item),
            _ => None,
        }) {
            println!("{}:", "Items".subheading_style());
            for name in names {
                println!("    * {}", name.item_style());
            }
        }
    }

    fn room_exit_list(&self) {
        if let Some(ViewItem::RoomExits(directions)) = self.items.iter().find_map(|i| match i.view_item {
            ViewItem::RoomExits(_) => Some(&i.view_item),
            _ => None,
        }) {
            let listed: Vec<String> = directions.iter().map(|d| d.exit_style().to_string()).collect();
            println!("{}: {}", "Exits".subheading_style(), listed.join(", "));
        }
    }

    fn room_puzzle_hint(&self) {
        if self.items.iter().any(|i| i.view_item == ViewItem::RoomPuzzleHint) {
            println!(
                "\n{}",
                fill("There seems to be a riddle here (try `solve`).", indented_block()).hint_style()
            );
        }
    }

    /// Clears the View's buffer.
    pub fn reset(&mut self) {
        self.items.clear();
    }
}

/// Subsections of the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    /// Movement text shown before anything else.
    Transition,
    /// Room description, items, exits.
    Environment,
    /// Direct results of the player's command.
    DirectResult,
    /// Events, traps, and the end of the game.
    WorldResponse,
    /// Meta/game-system feedback (help, quit summary).
    System,
}

/// Wrapper for a `ViewItem` to allow flexible ordering of display items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub section: Section,
    pub priority: isize,
    pub custom_priority: Option<isize>,
    pub view_item: ViewItem,
    pub sequence: usize,
}

impl ViewEntry {
    /// Returns an overriding custom display priority if one is set, otherwise the base value.
    fn effective_priority(&self) -> isize {
        self.custom_priority.unwrap_or(self.priority)
    }
}

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    EngineMessage(String),
    Error(String),
    GameLost(String),
    GameWon(String),
    Help {
        basic_text: String,
        commands: Vec<HelpEntry>,
    },
    Inventory(Vec<String>),
    ItemLost(String),
    QuitSummary {
        steps: usize,
        items: usize,
    },
    RoomDescription {
        name: String,
        description: String,
    },
    RoomExits(Vec<String>),
    RoomItems(Vec<String>),
    RoomPuzzleHint,
    TransitionMessage(String),
    TrapSprung(String),
    TriggeredEvent(String),
}
impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::RoomDescription { .. }
            | ViewItem::RoomItems(_)
            | ViewItem::RoomExits(_)
            | ViewItem::RoomPuzzleHint => Section::Environment,
            ViewItem::ActionSuccess(_) | ViewItem::ActionFailure(_) | ViewItem::Error(_) | ViewItem::Inventory(_) => {
                Section::DirectResult
            },
            ViewItem::TriggeredEvent(_)
            | ViewItem::TrapSprung(_)
            | ViewItem::ItemLost(_)
            | ViewItem::GameWon(_)
            | ViewItem::GameLost(_) => Section::WorldResponse,
            ViewItem::QuitSummary { .. } | ViewItem::EngineMessage(_) | ViewItem::Help { .. } => Section::System,
            ViewItem::TransitionMessage(_) => Section::Transition,
        }
    }

    pub fn default_priority(&self) -> isize {
        match &self {
            ViewItem::TrapSprung(_) => -20,
            ViewItem::ItemLost(_) => -10,
            ViewItem::GameWon(_) | ViewItem::GameLost(_) => 100,
            _ => 0,
        }
    }
}
