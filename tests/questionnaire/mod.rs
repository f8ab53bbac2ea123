//! Conditional questionnaire behaviour over the adoption form's rule set

mod scenarios;
mod session;

use adote_cli::questionnaire::{
    Question, QuestionCatalog, QuestionKind, QuestionRecord, Questionnaire, RuleTable,
};

pub const WHY_ADOPT: &str = "Por que você quer adotar?";
pub const RESIDENCE: &str = "Qual o tipo da sua residência?";
pub const YARD: &str = "Sua casa possui quintal com muros e portões altos?";
pub const OTHER_PETS: &str = "Possui outros animais?";
pub const WHICH_PETS: &str = "Quais animais?";

pub fn records() -> Vec<QuestionRecord> {
    [
        (1, WHY_ADOPT, QuestionKind::FreeText),
        (5, RESIDENCE, QuestionKind::MultipleChoice),
        (6, YARD, QuestionKind::MultipleChoice),
        (8, OTHER_PETS, QuestionKind::MultipleChoice),
        (9, WHICH_PETS, QuestionKind::FreeText),
    ]
    .into_iter()
    .map(|(id, text, kind)| QuestionRecord::from(&Question::new(id, text, kind)))
    .collect()
}

pub fn catalog() -> QuestionCatalog {
    QuestionCatalog::from_records(records())
}

pub fn questionnaire() -> Questionnaire {
    Questionnaire::new(catalog(), RuleTable::adoption_form())
}

/// Answer every visible question, re-reading visibility after each answer
pub fn answer_all(questionnaire: &mut Questionnaire, choose: impl Fn(&Question, &[String]) -> String) {
    let mut asked = std::collections::HashSet::new();
    loop {
        let next = questionnaire
            .visible_questions()
            .into_iter()
            .find(|q| !asked.contains(&q.id))
            .cloned();
        let Some(question) = next else {
            break;
        };
        let answer = choose(&question, questionnaire.options(question.id));
        questionnaire.set_answer(question.id, answer);
        asked.insert(question.id);
    }
}
