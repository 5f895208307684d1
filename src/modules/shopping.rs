use crate::config::Config;
use crate::console::Prompt;
use crate::exceptions::HearthError;
use crate::module::CommandModule;
use crate::modules::store::{JsonStore, Record, split_ids};
use crate::table::{Alignment, Table, align};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const IDENTITY: &str = "sl_module";
pub const DATA_FILE: &str = "shoppinglist.json";

const USAGE_ERROR: &str = "Error. Please type <help sl> for the correct usage.";
const EMPTY_LIST: &str = "Shopping list is empty.";

const HELP: &str = r#"Shopping List Module

Usage: sl [command] <args>
    sl add                                  Creates item adding dialogue.
    sl add <name> <quantity>                Adds new item.
    sl add <"name"> <"quantity">            Adds new item with multiple words.
    sl remove                               Queries the desired item ID(s) to remove and removes them.
    sl remove <item_id(s)>                  Removes the item(s) separated with a comma or space interchangeably. (2, 4 5 is parsed as 2nd, 4th and 5th element.)
    sl edit                                 Queries for the edit.
    sl edit <item_id> <name> <quantity>     Edits the desired item.
    sl edit <item_id> <"name"> <"quantity"> Edits the desired item with multiple words. Empty quotes leave a value unchanged.
    sl clear                                Clear the shopping list.
    sl list                                 Lists the shopping list.
    sl print                                Pretty prints the shopping list.

Examples:
    sl add "Milk" "4L"                      Adds milk item with 4L quantity to the list.
    sl add Butter 2pcs                      Adds butter item with 2pcs quantity to the list.
    sl remove 2, 4, 12                      Removes 2nd, 4th and 12th items from the list.
    sl remove 1 7 25                        Removes first, 7th and 25th items from the list.
    sl edit 5 "Rice" ""                     Edits the 5th element's name to "Rice".
    sl edit 8 Bread 1                       Edits the 8th element's name to Bread and quantity to 1."#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: usize,
    pub name: String,
    pub quantity: String,
}

impl Record for ShoppingItem {
    fn id(&self) -> usize {
        self.id
    }

    fn set_id(&mut self, id: usize) {
        self.id = id;
    }
}

pub fn factory(config: &Config) -> Result<Box<dyn CommandModule>, HearthError> {
    Ok(Box::new(ShoppingListModule::open(config.data_file(DATA_FILE))?))
}

pub struct ShoppingListModule {
    store: JsonStore<ShoppingItem>,
}

impl ShoppingListModule {
    pub fn open(path: PathBuf) -> Result<Self, HearthError> {
        Ok(Self {
            store: JsonStore::open(path)?,
        })
    }

    pub fn items(&self) -> &[ShoppingItem] {
        self.store.items()
    }

    fn add(&mut self, args: &[String], prompt: &mut dyn Prompt) -> Result<String, HearthError> {
        let (name, quantity) = if args.is_empty() {
            let name = prompt.ask("Name of the item? ")?;
            let quantity = prompt.ask("Quantity? ")?;
            (name, quantity)
        } else {
            match requote(args).as_deref() {
                Some([name, quantity]) => (name.clone(), quantity.clone()),
                _ => return Ok(USAGE_ERROR.to_string()),
            }
        };

        let message = format!("{} with quantity of {} added to the list.", name, quantity);
        self.store.push(ShoppingItem {
            id: self.store.next_id(),
            name,
            quantity,
        });
        self.store.save()?;
        Ok(message)
    }

    fn remove(&mut self, args: &[String], prompt: &mut dyn Prompt) -> Result<String, HearthError> {
        let ids = if args.is_empty() {
            split_ids(&[prompt.ask("Enter ID(s) of the item: ")?])
        } else {
            split_ids(args)
        };

        let report = self
            .store
            .apply_ids(ids.iter().map(String::as_str), |items, pos| {
                items.remove(pos);
            });
        self.store.reindex();
        self.store.save()?;
        Ok(report.summarize("Items", "removed."))
    }

    fn edit(&mut self, args: &[String], prompt: &mut dyn Prompt) -> Result<String, HearthError> {
        if args.is_empty() {
            let id = prompt.ask("Type the item ID: ")?;
            let name = prompt.ask("Type the name (enter to not change): ")?;
            let quantity = prompt.ask("Type the quantity (enter to not change): ")?;
            if id.is_empty() {
                return Ok("Please enter a valid ID.\nNothing has changed...".to_string());
            }
            let Ok(id) = id.parse::<usize>() else {
                return Ok(format!("{} is not a valid item ID.", id));
            };
            return self.apply_edit(id, &name, &quantity);
        }

        let Some(args) = requote(args) else {
            return Ok(USAGE_ERROR.to_string());
        };
        let Some((id, fields)) = args.split_first() else {
            return Ok(USAGE_ERROR.to_string());
        };
        let Ok(id) = id.parse::<usize>() else {
            return Ok(format!("{} is not a valid ID.", id));
        };
        match fields {
            [name, quantity] => self.apply_edit(id, name, quantity),
            _ => Ok(USAGE_ERROR.to_string()),
        }
    }

    /// Empty `name` or `quantity` keeps the current value.
    fn apply_edit(&mut self, id: usize, name: &str, quantity: &str) -> Result<String, HearthError> {
        let Some(item) = self.store.find_mut(id) else {
            return Ok(format!("Item {} not found.", id));
        };
        if name.is_empty() && quantity.is_empty() {
            return Ok("Nothing changed.".to_string());
        }
        if !name.is_empty() {
            item.name = name.to_string();
        }
        if !quantity.is_empty() {
            item.quantity = quantity.to_string();
        }
        self.store.save()?;
        Ok(format!("Item {} edited!", id))
    }

    fn clear(&mut self, prompt: &mut dyn Prompt) -> Result<String, HearthError> {
        if self.store.is_empty() {
            return Ok(EMPTY_LIST.to_string());
        }
        let confirm = prompt.ask("Clear the shopping list? (Y/n) ")?;
        if confirm.is_empty() || confirm.eq_ignore_ascii_case("y") {
            self.store.clear();
            self.store.save()?;
            Ok("Shopping list cleared.".to_string())
        } else {
            Ok("Action aborted.".to_string())
        }
    }

    fn list(&self) -> String {
        if self.store.is_empty() {
            return EMPTY_LIST.to_string();
        }
        let width = crate::console::get_terminal_width();
        let column = width.saturating_sub(3) / 2;

        let mut lines = vec![align("Shopping List", width, Alignment::Center), "─".repeat(width)];
        for item in self.store.items() {
            lines.push(format!(
                "{}{}{}",
                align(&format!("{}.", item.id), 4, Alignment::Left),
                align(&item.name, column, Alignment::Left),
                align(&item.quantity, column, Alignment::Right)
            ));
        }
        lines.push("─".repeat(width));
        lines.join("\n")
    }

    fn print(&self) -> Result<String, HearthError> {
        if self.store.is_empty() {
            return Ok(EMPTY_LIST.to_string());
        }
        let table = Table::builder()
            .title("Shopping List")
            .show_date(true)
            .rows(
                self.store
                    .items()
                    .iter()
                    .map(|item| vec![item.name.as_str(), item.quantity.as_str(), "[ ]"]),
            )
            .headers(["Item", "Quantity", "Purchased"])
            .row_paddings(vec![0, 0, 0])
            .row_alignments(vec![Alignment::Left, Alignment::Left, Alignment::Center])
            .header_alignments(vec![Alignment::Center; 3])
            .build()?;
        Ok(table.render())
    }
}

/// Re-splits whitespace-separated arguments honoring shell quotes, so that
/// `"two words"` becomes one argument and `""` an empty one.
fn requote(args: &[String]) -> Option<Vec<String>> {
    shlex::split(&args.join(" "))
}

impl CommandModule for ShoppingListModule {
    fn execute(&mut self, args: &[String], prompt: &mut dyn Prompt) -> Result<String, HearthError> {
        let rest = args.get(1..).unwrap_or_default();
        match args.first().map(String::as_str) {
            Some("list") => Ok(self.list()),
            Some("print") => self.print(),
            Some("add") => self.add(rest, prompt),
            Some("remove") => self.remove(rest, prompt),
            Some("edit") => self.edit(rest, prompt),
            Some("clear") => self.clear(prompt),
            _ => Ok(self.help()),
        }
    }

    fn help(&self) -> String {
        HELP.to_string()
    }
}
