//! Built-in demo corpus for smoke runs without a real menu database.

use uuid::Uuid;

use menumatch_core::{Dish, Restaurant, Result};
use menumatch_store::CorpusStore;

/// Two restaurants with a handful of dishes each. Returns
/// (restaurants inserted, dishes inserted).
pub fn seed_demo_corpus(store: &CorpusStore) -> Result<(usize, usize)> {
    let corpus: &[(&str, &str, &[(&str, &str)])] = &[
        (
            "The Salty Anchor",
            "ChIJdemo-salty-anchor",
            &[
                ("Clam Chowder (Bowl)", "Starters"),
                ("Lobster Roll", "Mains"),
                ("Seared Scallops", "Mains"),
                ("Fish and Chips", "Mains"),
            ],
        ),
        (
            "Harbor Grill",
            "ChIJdemo-harbor-grill",
            &[
                ("Burger of the Day", "Mains"),
                ("Caesar Salad", "Starters"),
                ("Grilled Salmon", "Mains"),
            ],
        ),
    ];

    let mut dish_count = 0;
    for &(name, place_ref, dishes) in corpus {
        let restaurant = Restaurant {
            id: Uuid::new_v4(),
            name: name.to_string(),
            place_ref: place_ref.to_string(),
        };
        store.add_restaurant(&restaurant)?;
        for &(dish_name, category) in dishes {
            store.add_dish(&Dish {
                id: Uuid::new_v4(),
                name: dish_name.to_string(),
                category: category.to_string(),
                restaurant_id: restaurant.id,
            })?;
            dish_count += 1;
        }
    }
    Ok((corpus.len(), dish_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_corpus_preserves_menu_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = CorpusStore::open(dir.path().join("demo.db")).unwrap();
        let (restaurants, dishes) = seed_demo_corpus(&store).unwrap();
        assert_eq!(restaurants, 2);
        assert_eq!(dishes, 7);

        let loaded = store.load_restaurants().unwrap();
        assert_eq!(loaded[0].name, "The Salty Anchor");

        let grouped = store.load_dishes_grouped().unwrap();
        assert_eq!(grouped[&loaded[0].id][0].name, "Clam Chowder (Bowl)");
    }
}
