//! Predefined recipes loaded at start-up.
//! Ids are stable so front-ends can link to them.

use crate::domain::models::{Ingredient, Recipe, Unit};

pub fn recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "seed-1",
            "Tomato Soup",
            "Slow-simmered tomatoes blended with garlic and basil.",
        )
        .with_ingredients([
            Ingredient::new("Tomatoes", 6.0, Unit::Nos),
            Ingredient::new("Garlic", 2.0, Unit::Nos),
            Ingredient::new("Vegetable Stock", 1.0, Unit::L),
            Ingredient::new("Salt", 500.0, Unit::Mg),
        ]),
        Recipe::new("seed-2", "Masala Chai", "Spiced milk tea brewed on the stove.").with_ingredients(
            [
                Ingredient::new("Water", 250.0, Unit::Ml),
                Ingredient::new("Milk", 150.0, Unit::Ml),
                Ingredient::new("Tea Leaves", 5.0, Unit::Mg),
                Ingredient::new("Cardamom Pods", 3.0, Unit::Nos),
            ],
        ),
        Recipe::new(
            "seed-3",
            "Pancakes",
            "Fluffy breakfast pancakes, best served with syrup.",
        )
        .with_ingredients([
            Ingredient::new("Eggs", 2.0, Unit::Nos),
            Ingredient::new("Milk", 300.0, Unit::Ml),
            Ingredient::new("Baking Powder", 10.0, Unit::Mg),
        ]),
        Recipe::new("seed-4", "Lemonade", "Fresh lemons, sugar and cold water.").with_ingredients([
            Ingredient::new("Lemons", 4.0, Unit::Nos),
            Ingredient::new("Cold Water", 1.0, Unit::L),
        ]),
        Recipe::new(
            "seed-5",
            "Vegetable Curry",
            "Mixed vegetables cooked in a coconut curry sauce.",
        )
        .with_ingredients([
            Ingredient::new("Potatoes", 2.0, Unit::Nos),
            Ingredient::new("Carrots", 2.0, Unit::Nos),
            Ingredient::new("Coconut Milk", 400.0, Unit::Ml),
            Ingredient::new("Curry Powder", 15.0, Unit::Mg),
        ]),
        Recipe::new("seed-6", "Garlic Bread", "Toasted bread with garlic butter.").with_ingredients([
            Ingredient::new("Baguette", 1.0, Unit::Nos),
            Ingredient::new("Garlic", 3.0, Unit::Nos),
        ]),
        Recipe::new("seed-7", "Fruit Salad", "Seasonal fruit with a squeeze of lime.")
            .with_ingredients([
                Ingredient::new("Apples", 2.0, Unit::Nos),
                Ingredient::new("Bananas", 2.0, Unit::Nos),
                Ingredient::new("Lime Juice", 30.0, Unit::Ml),
            ]),
    ]
}
