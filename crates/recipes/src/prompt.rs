/// Build the single recipe prompt from the current item names.
///
/// Names are joined with `", "` into a fixed instruction asking for recipe
/// names only and telling the model to skip anything non-edible.
pub fn recipe_prompt(names: &[&str]) -> String {
    let ingredients = names.join(", ");
    format!(
        "Using these ingredients: {ingredients}, suggest a few recipes names, \
         not the complete recipe. If an ingredient isn't edible, exclude it \
         from consideration"
    )
}
