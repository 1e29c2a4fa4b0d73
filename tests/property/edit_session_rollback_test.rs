//! Property-based tests for edit-session commit and rollback.

use linx::database::Database;
use linx::managers::edit_session::{EditSessionController, EditSessionTrait};
use linx::managers::tree_store::{insert_node, remove_by_id, TreeStore, TreeStoreTrait};
use linx::types::node::Node;
use proptest::prelude::*;
use proptest::sample::Index;

/// Tree of small arity: each entry inserts a folder or link under an earlier folder or the root.
fn arb_tree() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec((any::<bool>(), proptest::option::of(any::<Index>())), 1..25).prop_map(
        |inserts| {
            let mut tree = Vec::new();
            let mut folders: Vec<String> = Vec::new();
            for (i, (is_folder, target)) in inserts.into_iter().enumerate() {
                let id = format!("{}", 1_700_000_000_000u64 + i as u64);
                let node = if is_folder {
                    Node::folder(id.clone(), format!("F{}", i))
                } else {
                    Node::link(id.clone(), format!("L{}", i), format!("https://l{}.io", i))
                };
                let target = match target {
                    Some(index) if !folders.is_empty() => {
                        Some(folders[index.index(folders.len())].clone())
                    }
                    _ => None,
                };
                tree = insert_node(&tree, target.as_deref(), node).unwrap();
                if is_folder {
                    folders.push(id);
                }
            }
            tree
        },
    )
}

fn session_over(tree: &[Node]) -> EditSessionController<TreeStore<Database>> {
    let store = TreeStore::new(Database::open_in_memory().unwrap());
    store.persist(tree).unwrap();
    EditSessionController::new(store)
}

/// Picks an id from the tree, or an absent one when `index` is `None`.
fn pick_id(tree_len: usize, index: Option<Index>) -> String {
    match index {
        Some(i) => format!("{}", 1_700_000_000_000u64 + i.index(tree_len) as u64),
        None => "absent".to_string(),
    }
}

fn count(tree: &[Node]) -> usize {
    tree.iter()
        .map(|node| 1 + node.items().map(count).unwrap_or(0))
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn cancel_restores_original_tree(
        tree in arb_tree(),
        x in proptest::option::of(any::<Index>()),
        y in proptest::option::of(any::<Index>()),
    ) {
        let n = count(&tree);
        let mut session = session_over(&tree);
        session.enter_edit().unwrap();
        session.remove_by_id(&pick_id(n, x)).unwrap();
        session.remove_by_id(&pick_id(n, y)).unwrap();
        session.cancel().unwrap();

        prop_assert_eq!(session.tree(), tree.as_slice());
        prop_assert_eq!(session.store().load(), tree);
    }

    #[test]
    fn confirm_persists_exactly_the_removal(
        tree in arb_tree(),
        x in proptest::option::of(any::<Index>()),
    ) {
        let id = pick_id(count(&tree), x);
        let mut session = session_over(&tree);
        session.enter_edit().unwrap();
        session.remove_by_id(&id).unwrap();
        session.confirm().unwrap();

        let expected = remove_by_id(&tree, &id);
        prop_assert_eq!(session.store().load(), expected.clone());
        prop_assert!(session.cancel().is_err());
        prop_assert_eq!(session.store().load(), expected);
    }
}
