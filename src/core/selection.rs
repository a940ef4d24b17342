use crate::core::{AnswerSource, FieldSet, Notice, Notifier};
use crate::utils::error::Result;
use indexmap::IndexSet;

/// A valid reply to "Do you need X?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Affirm,
    Decline,
    Quit,
}

impl Answer {
    /// Empty input means yes. Anything unrecognised yields `None` and is asked again.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "" | "y" | "yes" => Some(Answer::Affirm),
            "n" | "no" => Some(Answer::Decline),
            "q" | "quit" => Some(Answer::Quit),
            _ => None,
        }
    }
}

/// 依命令列與互動模式決定要匯出的欄位（兩者取聯集）
pub fn resolve<N, A>(
    explicit: Option<&[String]>,
    interactive: bool,
    available: &IndexSet<String>,
    notifier: &mut N,
    answers: &mut A,
) -> Result<FieldSet>
where
    N: Notifier,
    A: AnswerSource,
{
    let mut selected = FieldSet::new();

    if let Some(requested) = explicit {
        select_explicit(requested, available, &mut selected, notifier);
    }
    if interactive {
        select_interactive(available, &mut selected, notifier, answers)?;
    }

    tracing::debug!("Resolved {} properties: {}", selected.len(), selected);
    Ok(selected)
}

/// Adds every requested name that exists in `available`; the rest are reported and skipped.
pub fn select_explicit<N: Notifier>(
    requested: &[String],
    available: &IndexSet<String>,
    selected: &mut FieldSet,
    notifier: &mut N,
) {
    let mut seen = IndexSet::new();
    for name in requested.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        if !seen.insert(name) {
            continue;
        }
        if available.contains(name) {
            selected.insert(name);
            notifier.notify(Notice::PropertyFound(name));
        } else {
            tracing::debug!("Requested property '{}' is not in the dataset", name);
            notifier.notify(Notice::PropertyNotFound(name));
        }
    }
}

/// Walks the remaining properties in dataset order, asking y/n/q for each.
///
/// Properties already in `selected` are not asked about. Quit (or end of
/// input) stops the walk; properties after it are never offered.
pub fn select_interactive<N, A>(
    available: &IndexSet<String>,
    selected: &mut FieldSet,
    notifier: &mut N,
    answers: &mut A,
) -> Result<()>
where
    N: Notifier,
    A: AnswerSource,
{
    notifier.clear();
    for field in available {
        if selected.contains(field) {
            continue;
        }

        match ask(field, selected, notifier, answers)? {
            Answer::Affirm => {
                selected.insert(field.as_str());
            }
            Answer::Decline => {}
            Answer::Quit => {
                tracing::debug!("Interactive selection stopped at '{}'", field);
                break;
            }
        }
        notifier.clear();
    }
    Ok(())
}

fn ask<N, A>(field: &str, selected: &FieldSet, notifier: &mut N, answers: &mut A) -> Result<Answer>
where
    N: Notifier,
    A: AnswerSource,
{
    loop {
        notifier.notify(Notice::SelectionStatus(selected));
        notifier.notify(Notice::Question(field));

        let Some(line) = answers.read_answer()? else {
            return Ok(Answer::Quit);
        };
        match Answer::parse(&line) {
            Some(answer) => return Ok(answer),
            None => notifier.notify(Notice::InvalidAnswer(&line)),
        }
    }
}
