//! Topic report: the conversation script rendered as Markdown.

use nursebot_core::transition::table;
use nursebot_core::{Language, MessageKey, Outcome, Stage, Transition, message};
use std::fmt::Write;

/// Input for the topics report.
#[derive(Debug, Clone, Copy)]
pub struct TopicsInput {
    pub language: Language,
}

/// Strategy for printing the topic report.
#[derive(Debug, Clone, Copy)]
pub struct TopicsStrategy;

impl super::CommandStrategy for TopicsStrategy {
    type Input = TopicsInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        print!("{}", render_topics(input.language)?);
        Ok(())
    }
}

fn describe(from: Stage, step: &Transition) -> String {
    let reply = match step.message {
        MessageKey::Prompt(_) => "topic",
        MessageKey::Clarification(_) => "clarify",
        MessageKey::BiologyRequired => "biology required",
        MessageKey::Final => "closing",
        MessageKey::End => "goodbye",
        MessageKey::Default => "fallback",
    };
    if step.is_self_loop(from) {
        format!("stay ({reply})")
    } else {
        format!("{} ({reply})", step.next.title())
    }
}

/// Render the stage list, transition matrix and topic texts.
pub fn render_topics(language: Language) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "# Nursing College Admissions: Conversation Topics")?;
    writeln!(out)?;
    writeln!(out, "Language: {language}")?;
    writeln!(out)?;
    writeln!(out, "## Flow")?;
    writeln!(out)?;
    writeln!(out, "| # | Stage | Yes | No | Unclear |")?;
    writeln!(out, "|---|-------|-----|----|---------|")?;

    let cells = table();
    for (index, stage) in Stage::ALL.into_iter().enumerate() {
        let cell = |outcome: Outcome| {
            cells
                .iter()
                .find(|(s, o, _)| *s == stage && *o == outcome)
                .map_or_else(String::new, |(_, _, step)| describe(stage, step))
        };
        writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            index + 1,
            stage.title(),
            cell(Outcome::Affirmative),
            cell(Outcome::Negative),
            cell(Outcome::Unclear),
        )?;
    }

    writeln!(out)?;
    writeln!(out, "## Topics")?;
    for stage in Stage::ALL
        .into_iter()
        .filter(|s| *s > Stage::Initial && *s < Stage::End)
    {
        writeln!(out)?;
        writeln!(out, "### {}", stage.title())?;
        writeln!(out)?;
        writeln!(out, "{}", message(MessageKey::Prompt(stage), language))?;
    }

    writeln!(out)?;
    writeln!(out, "### Closing")?;
    writeln!(out)?;
    writeln!(out, "{}", message(MessageKey::Final, language))?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_every_stage() {
        let report = render_topics(Language::English).unwrap();
        for stage in Stage::ALL {
            assert!(report.contains(stage.title()), "{stage}");
        }
        assert!(report.contains("| 3 | Biology Prerequisite | Program Details (topic) | stay (biology required) | stay (clarify) |"));
        assert!(report.contains("Total Annual Fees: ₹70,000 INR"));
    }

    #[test]
    fn test_report_in_hindi() {
        let report = render_topics(Language::Hindi).unwrap();
        assert!(report.contains("Language: hi"));
        assert!(report.contains("क्या आप Nursing College"));
    }
}
