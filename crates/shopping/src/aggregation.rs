use std::collections::{BTreeMap, HashMap};

use kitcha_shared::{
    IngredientCategory, IngredientKey, MealPlanEntry, PantryItem, Quantity, Recipe, Unit,
};

/// A meal plan entry together with the recipe it points at, if that recipe
/// still exists.
#[derive(Debug, Clone)]
pub struct ScheduledMeal {
    pub entry: MealPlanEntry,
    pub recipe: Option<Recipe>,
}

/// One deduplicated line of a shopping list, before pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedIngredient {
    pub name: String,
    pub unit: Unit,
    /// Amount still to buy once the pantry has been taken into account
    pub quantity: Quantity,
    /// Amount the meal plan needs in total
    pub required: Quantity,
    /// Amount taken from the pantry, when the pantry covered part of the line
    pub pantry_quantity: Option<Quantity>,
    pub recipes: Vec<String>,
    pub category: Option<IngredientCategory>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub items: Vec<AggregatedIngredient>,
    /// Entries dropped because their recipe was missing or had no ingredients
    pub skipped: usize,
}

type Stock = (Quantity, IngredientCategory);

struct Line {
    name: String,
    required: Quantity,
    recipes: Vec<String>,
    category: Option<IngredientCategory>,
}

/// Ingredient Aggregation Service
///
/// Stateless domain service turning a meal plan into shopping list lines:
/// - "Flour 2 cups" + "flour 1 cup" = "flour 3 cups"
/// - "milk 1 cup" + "milk 240 ml" = 2 separate lines (no unit conversion)
/// - quantities are scaled by the entry servings over the recipe base servings
/// - whatever the pantry already holds is subtracted, fully covered lines are dropped
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    pub fn aggregate(meals: &[ScheduledMeal], pantry: &[PantryItem]) -> Aggregation {
        let mut skipped = 0;
        let mut lines: BTreeMap<IngredientKey, Line> = BTreeMap::new();

        for meal in meals {
            let Some(recipe) = meal
                .recipe
                .as_ref()
                .filter(|recipe| !recipe.ingredients().is_empty())
            else {
                skipped += 1;
                continue;
            };

            for ingredient in recipe.ingredients() {
                let required = ingredient
                    .quantity()
                    .scale(meal.entry.servings(), recipe.servings());

                let line = lines.entry(ingredient.key()).or_insert_with(|| Line {
                    name: ingredient.name().to_owned(),
                    required: Quantity::ZERO,
                    recipes: vec![],
                    category: None,
                });

                line.required += required;

                if line.category.is_none() {
                    line.category = ingredient.category();
                }

                if !line.recipes.iter().any(|name| name == recipe.name()) {
                    line.recipes.push(recipe.name().to_owned());
                }
            }
        }

        let pantry = Self::pantry_by_key(pantry);

        let mut items = lines
            .into_iter()
            .filter_map(|(key, line)| {
                let stock = pantry.get(&key);
                let taken = stock
                    .map(|(quantity, _)| (*quantity).min(line.required))
                    .filter(|taken| !taken.is_zero());
                let quantity = line.required.saturating_sub(taken.unwrap_or(Quantity::ZERO));

                if quantity.is_zero() {
                    return None;
                }

                Some(AggregatedIngredient {
                    name: line.name,
                    unit: key.unit,
                    quantity,
                    required: line.required,
                    pantry_quantity: taken,
                    recipes: line.recipes,
                    category: line.category.or(stock.map(|(_, category)| *category)),
                })
            })
            .collect::<Vec<_>>();

        // Aisle order first, uncategorised lines last, then alphabetical.
        items.sort_by(|a, b| {
            (a.category.is_none(), a.category)
                .cmp(&(b.category.is_none(), b.category))
                .then_with(|| {
                    IngredientKey::new(&a.name, a.unit).cmp(&IngredientKey::new(&b.name, b.unit))
                })
        });

        Aggregation { items, skipped }
    }

    fn pantry_by_key(pantry: &[PantryItem]) -> HashMap<IngredientKey, Stock> {
        let mut stock: HashMap<IngredientKey, Stock> = HashMap::new();

        for item in pantry {
            let entry = stock
                .entry(item.key())
                .or_insert((Quantity::ZERO, item.category()));
            entry.0 += item.quantity();
        }

        stock
    }
}
