/// Persona of one step in the research pipeline.
#[derive(Debug, Clone, Copy)]
pub struct AgentRole {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
}

impl AgentRole {
    /// System prompt built from the persona.
    #[must_use]
    pub fn system_prompt(&self) -> String {
        format!(
            "You are a {}. {}\n\nYour goal: {}",
            self.role, self.backstory, self.goal
        )
    }
}

pub const RESEARCHER: AgentRole = AgentRole {
    role: "Senior Web Researcher",
    goal: "Gather the latest and most relevant information about the user's query and \
           format it as a comprehensive summary.",
    backstory: "You are an expert at using web search to find real-time, accurate and cited \
                information on any given topic. Your output is precise and well-structured.",
};

pub const WRITER: AgentRole = AgentRole {
    role: "Professional Technical Writer",
    goal: "Write a final, professionally formatted markdown report based on the context \
           provided by the researcher.",
    backstory: "You are a meticulous technical writer who turns raw research data into \
                polished, production-ready documentation.",
};

/// Task prompt for the researcher. `sources` is the formatted search output.
#[must_use]
pub fn research_task(query: &str, today: &str, sources: &str) -> String {
    format!(
        "Today's date is {today}.\n\
         Conduct advanced research on the user's query: '{query}'.\n\
         Focus on recent developments (past 6 months) and list all sources.\n\
         The final output must be a single, well-structured text summary of findings.\n\n\
         Search results:\n{sources}"
    )
}

/// Task prompt for the writer, given the researcher's summary as context.
#[must_use]
pub fn report_task(query: &str, summary: &str) -> String {
    format!(
        "Based on the summary provided by the researcher, write a final report on '{query}'.\n\
         The report must be in **Markdown format** with a title and bullet points.\n\
         Return only the report.\n\n\
         Research summary:\n{summary}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_names_role_and_goal() {
        let prompt = RESEARCHER.system_prompt();
        assert!(prompt.starts_with("You are a Senior Web Researcher."));
        assert!(prompt.contains("comprehensive summary"));
    }

    #[test]
    fn research_task_embeds_inputs() {
        let task = research_task("quantum hardware", "2025-06-01", "[1] Source (https://x)");
        assert!(task.contains("'quantum hardware'"));
        assert!(task.contains("2025-06-01"));
        assert!(task.ends_with("[1] Source (https://x)"));
    }

    #[test]
    fn report_task_carries_summary() {
        let task = report_task("q", "the findings");
        assert!(task.contains("Markdown format"));
        assert!(task.ends_with("the findings"));
    }
}
