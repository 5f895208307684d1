mod common;
use common::{builtin_dispatcher, console, output, run, run_with_input};
use hearth::exceptions::HearthError;
use hearth::modules::shopping::{DATA_FILE, ShoppingItem, ShoppingListModule};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use unicode_width::UnicodeWidthStr;

fn stored_items(root: &Path) -> Vec<ShoppingItem> {
    let content = fs::read_to_string(root.join(DATA_FILE)).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn names(root: &Path) -> Vec<String> {
    stored_items(root).into_iter().map(|i| i.name).collect()
}

#[test]
fn test_add_items_persists_with_sequential_ids() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    let mut d = builtin_dispatcher(root);

    assert_eq!(
        run(&mut d, "sl add Butter 2pcs"),
        "Butter with quantity of 2pcs added to the list."
    );
    assert_eq!(
        run(&mut d, r#"sl add "Whole Milk" "4 L""#),
        "Whole Milk with quantity of 4 L added to the list."
    );

    let items = stored_items(root);
    assert_eq!(
        items,
        vec![
            ShoppingItem {
                id: 1,
                name: "Butter".into(),
                quantity: "2pcs".into()
            },
            ShoppingItem {
                id: 2,
                name: "Whole Milk".into(),
                quantity: "4 L".into()
            },
        ]
    );
}

#[test]
fn test_add_with_wrong_argument_count_shows_usage() {
    let temp = tempdir().unwrap();
    let mut d = builtin_dispatcher(temp.path());

    let usage = "Error. Please type <help sl> for the correct usage.";
    assert_eq!(run(&mut d, "sl add Milk"), usage);
    assert_eq!(run(&mut d, "sl add Milk 2L extra"), usage);
    assert_eq!(run(&mut d, r#"sl add "Milk 2L"#), usage);
    assert!(!temp.path().join(DATA_FILE).exists());
}

#[test]
fn test_add_without_arguments_prompts_for_fields() {
    let temp = tempdir().unwrap();
    let mut d = builtin_dispatcher(temp.path());

    let mut prompt = console("Rye Bread\n1 loaf\n");
    let out = d.execute_command("sl add", &mut prompt).unwrap();

    assert_eq!(
        out.as_deref(),
        Some("Rye Bread with quantity of 1 loaf added to the list.")
    );
    assert_eq!(output(prompt), "Name of the item? Quantity? ");
}

#[test]
fn test_prompt_closed_mid_dialogue_is_an_execution_error() {
    let temp = tempdir().unwrap();
    let mut d = builtin_dispatcher(temp.path());

    let mut prompt = console("Only a name\n");
    let err = d.execute_command("sl add", &mut prompt).unwrap_err();

    assert!(matches!(err, HearthError::Execution { ref command, .. } if command == "sl"));
}

#[test]
fn test_remove_mixes_separators_and_reports_missing() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    let mut d = builtin_dispatcher(root);
    for item in ["Apples", "Bread", "Cheese"] {
        run(&mut d, &format!("sl add {} 1", item));
    }

    // WHEN removing ids 1 and 3 plus garbage
    let out = run(&mut d, "sl remove 1, 3 x 9");

    // THEN found and missing ids are reported separately
    assert_eq!(out, "Items 1, 3 removed.\nItems with IDs x, 9 not found.");

    // AND the remaining item is renumbered
    let items = stored_items(root);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].name, "Bread");
}

#[test]
fn test_remove_without_arguments_prompts_for_ids() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    let mut d = builtin_dispatcher(root);
    run(&mut d, "sl add Apples 1");
    run(&mut d, "sl add Bread 2");

    let out = run_with_input(&mut d, "sl remove", "2\n");

    assert_eq!(out, "Items 2 removed.");
    assert_eq!(names(root), vec!["Apples"]);
}

#[test]
fn test_edit_keeps_values_given_as_empty_quotes() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    let mut d = builtin_dispatcher(root);
    run(&mut d, "sl add Milk 4L");

    assert_eq!(run(&mut d, r#"sl edit 1 "Oat Milk" """#), "Item 1 edited!");
    assert_eq!(run(&mut d, r#"sl edit 1 "" """#), "Nothing changed.");
    assert_eq!(run(&mut d, "sl edit 9 Rice 1kg"), "Item 9 not found.");
    assert_eq!(run(&mut d, "sl edit x Rice 1kg"), "x is not a valid ID.");
    assert_eq!(
        run(&mut d, "sl edit 1 Rice"),
        "Error. Please type <help sl> for the correct usage."
    );

    let items = stored_items(root);
    assert_eq!(items[0].name, "Oat Milk");
    assert_eq!(items[0].quantity, "4L");
}

#[test]
fn test_interactive_edit() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    let mut d = builtin_dispatcher(root);
    run(&mut d, "sl add Milk 4L");

    assert_eq!(run_with_input(&mut d, "sl edit", "1\n\n2L\n"), "Item 1 edited!");
    assert_eq!(
        run_with_input(&mut d, "sl edit", "\nRice\n\n"),
        "Please enter a valid ID.\nNothing has changed..."
    );
    assert_eq!(
        run_with_input(&mut d, "sl edit", "one\n\n\n"),
        "one is not a valid item ID."
    );

    assert_eq!(stored_items(root)[0].quantity, "2L");
}

#[test]
fn test_clear_asks_for_confirmation() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    let mut d = builtin_dispatcher(root);

    assert_eq!(run(&mut d, "sl clear"), "Shopping list is empty.");

    run(&mut d, "sl add Milk 4L");
    assert_eq!(run_with_input(&mut d, "sl clear", "n\n"), "Action aborted.");
    assert_eq!(names(root), vec!["Milk"]);

    assert_eq!(run_with_input(&mut d, "sl clear", "\n"), "Shopping list cleared.");
    assert!(stored_items(root).is_empty());
}

#[test]
fn test_print_renders_a_table() {
    let temp = tempdir().unwrap();
    let mut d = builtin_dispatcher(temp.path());
    assert_eq!(run(&mut d, "sl print"), "Shopping list is empty.");

    run(&mut d, "sl add Milk 4L");
    run(&mut d, "sl add Eggs 12");

    let out = run(&mut d, "sl print");

    assert!(out.contains("Shopping List"));
    assert!(out.contains("Purchased"));
    assert!(out.contains("│ Milk │ 4L       │    [ ]    │"));
    let widths: Vec<usize> = out.lines().map(UnicodeWidthStr::width).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_list_shows_every_item() {
    let temp = tempdir().unwrap();
    let mut d = builtin_dispatcher(temp.path());
    assert_eq!(run(&mut d, "sl list"), "Shopping list is empty.");

    run(&mut d, "sl add Milk 4L");
    let out = run(&mut d, "sl list");

    assert!(out.contains("Shopping List"));
    let item_line = out.lines().find(|l| l.starts_with("1.")).unwrap();
    assert!(item_line.contains("Milk"));
    assert!(item_line.trim_end().ends_with("4L"));
}

#[test]
fn test_unknown_subcommand_shows_help() {
    let temp = tempdir().unwrap();
    let mut d = builtin_dispatcher(temp.path());

    assert!(run(&mut d, "sl").starts_with("Shopping List Module"));
    assert!(run(&mut d, "sl frobnicate").contains("Usage: sl [command] <args>"));
}

#[test]
fn test_items_survive_reload() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    let mut d = builtin_dispatcher(root);
    run(&mut d, "sl add Milk 4L");

    let reopened = ShoppingListModule::open(root.join(DATA_FILE)).unwrap();

    assert_eq!(reopened.items().len(), 1);
    assert_eq!(reopened.items()[0].name, "Milk");
}
