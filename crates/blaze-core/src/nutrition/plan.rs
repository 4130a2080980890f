//! Program nutrition content: default targets, sample day of eating,
//! meal prep checklist and grocery list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

impl Default for MacroTargets {
    fn default() -> Self {
        Self {
            calories: 2200,
            protein_g: 180,
            carbs_g: 200,
            fat_g: 70,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub description: String,
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub ingredients: Vec<String>,
}

fn meal(
    name: &str,
    description: &str,
    calories: u32,
    protein_g: u32,
    carbs_g: u32,
    fat_g: u32,
    ingredients: &[&str],
) -> Meal {
    Meal {
        name: name.to_string(),
        description: description.to_string(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
    }
}

/// One example day of eating that lands near the default targets.
pub fn sample_meal_plan() -> Vec<Meal> {
    vec![
        meal(
            "Protein Oatmeal",
            "Oats with protein powder, berries, and nut butter",
            450, 35, 55, 12,
            &["1 cup oats", "1 scoop protein powder", "1 cup berries", "1 tbsp almond butter"],
        ),
        meal(
            "Chicken & Rice Bowl",
            "Grilled chicken with rice and vegetables",
            550, 45, 55, 15,
            &["6oz chicken breast", "1 cup brown rice", "2 cups mixed vegetables", "1 tbsp olive oil"],
        ),
        meal(
            "Greek Yogurt & Fruit",
            "High protein snack",
            200, 20, 25, 2,
            &["1 cup Greek yogurt", "1/2 cup mixed fruit", "1 tbsp honey"],
        ),
        meal(
            "Salmon with Sweet Potato",
            "Omega-3 rich dinner",
            600, 45, 45, 25,
            &["6oz salmon fillet", "1 medium sweet potato", "2 cups roasted broccoli", "1 tbsp olive oil"],
        ),
        meal(
            "Casein Shake",
            "Pre-bed protein",
            150, 25, 5, 2,
            &["1 scoop casein protein", "8oz water or almond milk"],
        ),
    ]
}

use super::{GroceryItem, MealPrepItem};

pub fn default_meal_prep_items() -> Vec<MealPrepItem> {
    let names = [
        ("prep-1", "Cook 2 lbs chicken breast"),
        ("prep-2", "Prep 4 cups brown rice"),
        ("prep-3", "Chop vegetables for the week"),
        ("prep-4", "Portion overnight oats (4 servings)"),
        ("prep-5", "Hard boil 12 eggs"),
        ("prep-6", "Wash and prep salad greens"),
        ("prep-7", "Portion snacks into containers"),
        ("prep-8", "Make protein balls (optional)"),
    ];
    names
        .iter()
        .map(|&(id, name)| MealPrepItem {
            id: id.to_string(),
            name: name.to_string(),
            completed: false,
        })
        .collect()
}

pub fn default_grocery_list() -> Vec<GroceryItem> {
    let items: [(&str, &str, &str, &str); 22] = [
        ("g-1", "Chicken breast", "3 lbs", "Protein"),
        ("g-2", "Salmon fillets", "1.5 lbs", "Protein"),
        ("g-3", "Eggs", "2 dozen", "Protein"),
        ("g-4", "Greek yogurt", "32 oz", "Protein"),
        ("g-5", "Lean ground beef", "1 lb", "Protein"),
        ("g-6", "Brown rice", "2 lbs", "Carbs"),
        ("g-7", "Oats (rolled)", "42 oz", "Carbs"),
        ("g-8", "Sweet potatoes", "4 medium", "Carbs"),
        ("g-9", "Whole wheat bread", "1 loaf", "Carbs"),
        ("g-10", "Broccoli", "2 heads", "Vegetables"),
        ("g-11", "Spinach", "2 bags", "Vegetables"),
        ("g-12", "Bell peppers", "4", "Vegetables"),
        ("g-13", "Zucchini", "3", "Vegetables"),
        ("g-14", "Mixed salad greens", "2 containers", "Vegetables"),
        ("g-15", "Bananas", "1 bunch", "Fruits"),
        ("g-16", "Berries (frozen or fresh)", "2 lbs", "Fruits"),
        ("g-17", "Apples", "6", "Fruits"),
        ("g-18", "Olive oil", "1 bottle", "Fats"),
        ("g-19", "Almond butter", "1 jar", "Fats"),
        ("g-20", "Avocados", "4", "Fats"),
        ("g-21", "Whey protein powder", "1 container", "Supplements"),
        ("g-22", "Casein protein powder", "1 container", "Supplements"),
    ];
    items
        .iter()
        .map(|&(id, name, quantity, category)| GroceryItem {
            id: id.to_string(),
            name: name.to_string(),
            quantity: quantity.to_string(),
            category: category.to_string(),
            checked: false,
        })
        .collect()
}
