//! Selector matching for the question pool.
//!
//! A question survives filtering only when both axes allow it. Each axis
//! accepts several spellings of the same intent; the predicate docs list the
//! exact match levels.

use crate::models::{Question, Settings};

/// Keep the questions allowed by both selector axes, preserving catalog
/// order. The input slice is never reordered or mutated.
pub(crate) fn filter_questions(settings: &Settings, questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .filter(|q| is_category_allowed(settings, q) && is_sub_category_allowed(settings, q))
        .cloned()
        .collect()
}

/// A question passes the category axis when no categories are selected, or
/// when the selection names its raw label, its main category, or its
/// compound `main_sub` form.
fn is_category_allowed(settings: &Settings, question: &Question) -> bool {
    let selected = &settings.categories_selected;
    let (main, sub) = question.category_parts();
    selected.is_empty()
        || selected.contains(question.category.as_str())
        || selected.contains(main)
        || (!sub.is_empty() && selected.contains(format!("{}_{}", main, sub).as_str()))
}

/// A question passes the sub-category axis when no sub-categories are
/// selected, or when the selection names its effective sub-category, its raw
/// category label, the sub half of its compound category, or the compound
/// `main_sub` form. Unlike the category axis, the compound form is checked
/// even for delimiter-less labels, so a `"History_"` selection matches a
/// plain `"History"` question here.
fn is_sub_category_allowed(settings: &Settings, question: &Question) -> bool {
    let selected = &settings.sub_categories_selected;
    let (main, sub) = question.category_parts();
    selected.is_empty()
        || selected.contains(question.effective_sub_category())
        || selected.contains(question.category.as_str())
        || selected.contains(sub)
        || selected.contains(format!("{}_{}", main, sub).as_str())
}
