//! Built-in demo scenarios

/// Role key of the AI assistant in every script
pub const ASSISTANT_ROLE: &str = "ai_assistant";
/// Role key of the viewer's own persona
pub const USER_ROLE: &str = "user";

/// Tool the assistant appears to use while composing a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoTool {
    Search,
    Rag,
    Analyze,
}

impl DemoTool {
    pub fn badge(self) -> &'static str {
        match self {
            DemoTool::Search => "Search",
            DemoTool::Rag => "Memory",
            DemoTool::Analyze => "Analyze",
        }
    }

    pub fn progress_label(self) -> &'static str {
        match self {
            DemoTool::Search => "Searching...",
            DemoTool::Rag => "Retrieving memory...",
            DemoTool::Analyze => "Analyzing...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentPersona {
    pub name: &'static str,
    pub color: &'static str,
    pub gradient: Option<&'static str>,
}

impl AgentPersona {
    const fn person(name: &'static str, color: &'static str) -> Self {
        Self {
            name,
            color,
            gradient: None,
        }
    }

    const fn assistant() -> Self {
        Self {
            name: "Gradient AI",
            color: "#8b5cf6",
            gradient: Some("linear-gradient(135deg, #8b5cf6, #6366f1)"),
        }
    }

    /// Avatar background
    pub fn background(&self) -> &'static str {
        self.gradient.unwrap_or(self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub id: u32,
    pub role: &'static str,
    pub content: &'static str,
    /// Offset from scenario start
    pub delay_ms: u64,
    pub tool: Option<DemoTool>,
}

impl ScriptLine {
    const fn new(id: u32, role: &'static str, content: &'static str, delay_ms: u64) -> Self {
        Self {
            id,
            role,
            content,
            delay_ms,
            tool: None,
        }
    }

    const fn with_tool(mut self, tool: DemoTool) -> Self {
        self.tool = Some(tool);
        self
    }

    pub fn is_assistant(&self) -> bool {
        self.role == ASSISTANT_ROLE
    }

    pub fn is_user(&self) -> bool {
        self.role == USER_ROLE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub id: &'static str,
    pub name: &'static str,
    /// Role key to persona, in display order
    pub agents: Vec<(&'static str, AgentPersona)>,
    pub script: Vec<ScriptLine>,
}

impl Scenario {
    pub fn persona(&self, role: &str) -> Option<&AgentPersona> {
        self.agents
            .iter()
            .find(|(key, _)| *key == role)
            .map(|(_, persona)| persona)
    }

    pub fn online_count(&self) -> usize {
        self.agents.len()
    }
}

/// The demo catalogue, in tab order.
pub fn scenarios() -> Vec<Scenario> {
    use DemoTool::{Analyze, Rag, Search};

    vec![
        Scenario {
            id: "research",
            name: "Research",
            agents: vec![
                (USER_ROLE, AgentPersona::person("Alex", "#3b82f6")),
                ("researcher", AgentPersona::person("Dr. Chen", "#6366f1")),
                (ASSISTANT_ROLE, AgentPersona::assistant()),
                ("manager", AgentPersona::person("Sarah", "#10b981")),
            ],
            script: vec![
                ScriptLine::new(1, USER_ROLE, "What were the key points from the Transformer paper we discussed last week?", 500),
                ScriptLine::new(2, ASSISTANT_ROLE, "Based on chat memory, you discussed \"Attention Is All You Need\". Key insight: entirely attention-based architecture, abandoning RNNs and CNNs.", 2200).with_tool(Rag),
                ScriptLine::new(3, "researcher", "Right! Can you analyze feasibility with our private data?", 3600),
                ScriptLine::new(4, ASSISTANT_ROLE, "This architecture is highly compatible with existing distributed training clusters, estimated 40% efficiency improvement. Recommend validating on small dataset first.", 5200).with_tool(Analyze),
                ScriptLine::new(5, "manager", "Great! Alex, can you have a demo ready by next week?", 6600),
                ScriptLine::new(6, USER_ROLE, "With AI assistance, no problem! @Gradient help me prepare environment config.", 8000),
                ScriptLine::new(7, ASSISTANT_ROLE, "Docker config and dependency manifest generated and sent to your email.", 9600).with_tool(Analyze),
            ],
        },
        Scenario {
            id: "marketing",
            name: "Marketing",
            agents: vec![
                (USER_ROLE, AgentPersona::person("Emma", "#f43f5e")),
                ("creative", AgentPersona::person("Copywriter", "#f59e0b")),
                (ASSISTANT_ROLE, AgentPersona::assistant()),
                ("designer", AgentPersona::person("Designer", "#14b8a6")),
            ],
            script: vec![
                ScriptLine::new(1, USER_ROLE, "We need a slogan for our new \"Cherry Blossom Latte\" - spring limited edition!", 500),
                ScriptLine::new(2, ASSISTANT_ROLE, "Analyzed 3 years of spring beverage viral copy. Top keywords: \"romance\", \"encounter\", \"pink healing\", \"first love\"", 2200).with_tool(Search),
                ScriptLine::new(3, "creative", "How about: \"One sip of cherry blossoms, encounter your spring romance\"", 3600),
                ScriptLine::new(4, ASSISTANT_ROLE, "A/B test simulation shows 25% higher click rate than last year! Generated 3 poster drafts for selection.", 5200).with_tool(Analyze),
                ScriptLine::new(5, "designer", "Version 2 looks good, but can we change the background to Kyoto cherry blossom path?", 6600),
                ScriptLine::new(6, ASSISTANT_ROLE, "Regenerated with Kyoto Arashiyama cherry blossom tunnel elements, maintaining brand color consistency.", 8200).with_tool(Analyze),
                ScriptLine::new(7, USER_ROLE, "Perfect! Send it to operations for scheduling.", 9600),
            ],
        },
        Scenario {
            id: "coding",
            name: "Debugging",
            agents: vec![
                (USER_ROLE, AgentPersona::person("Mike", "#06b6d4")),
                ("senior", AgentPersona::person("Tech Lead", "#475569")),
                (ASSISTANT_ROLE, AgentPersona::assistant()),
                ("qa", AgentPersona::person("QA Engineer", "#eab308")),
            ],
            script: vec![
                ScriptLine::new(1, USER_ROLE, "Production is down! RecursionError: maximum recursion depth exceeded", 500),
                ScriptLine::new(2, ASSISTANT_ROLE, "Stack overflow detected. Analyzed last 3 commits, located issue in utils.py parse_tree function.", 2200).with_tool(Analyze),
                ScriptLine::new(3, "senior", "Is the base case condition incorrect?", 3600),
                ScriptLine::new(4, ASSISTANT_ROLE, "Yes, line 42 is missing null node check. Generated fix patch and added boundary test cases.", 5200).with_tool(Rag),
                ScriptLine::new(5, "qa", "Let me run regression tests, one moment...", 6600),
                ScriptLine::new(6, ASSISTANT_ROLE, "Pre-ran tests in sandbox environment, all 147 test cases passed, no side effects.", 8200).with_tool(Analyze),
                ScriptLine::new(7, USER_ROLE, "Amazing, submitting PR! @Tech Lead please review.", 9600),
            ],
        },
        Scenario {
            id: "travel",
            name: "Travel",
            agents: vec![
                (USER_ROLE, AgentPersona::person("Mike", "#f97316")),
                ("friend", AgentPersona::person("Amy", "#ec4899")),
                (ASSISTANT_ROLE, AgentPersona::assistant()),
                ("friend2", AgentPersona::person("Tom", "#22c55e")),
            ],
            script: vec![
                ScriptLine::new(1, USER_ROLE, "Planning to visit Kyoto this holiday, any recommendations?", 500),
                ScriptLine::new(2, ASSISTANT_ROLE, "I recall Amy visited Kiyomizu-dera last year with great reviews. Mike, you love photography - I recommend Fushimi Inari Shrine's thousand torii gates!", 2200).with_tool(Rag),
                ScriptLine::new(3, "friend", "Wow AI has great memory! The sunset at Kiyomizu-dera is stunning, highly recommend!", 3600),
                ScriptLine::new(4, "friend2", "I want to try kaiseki cuisine, any restaurant recommendations?", 5000),
                ScriptLine::new(5, ASSISTANT_ROLE, "Generated a 5-day \"Photography + Dining\" itinerary with 3 Michelin restaurant booking suggestions and optimal photo times.", 6600).with_tool(Search),
                ScriptLine::new(6, USER_ROLE, "Help me check flights, direct only!", 8000),
                ScriptLine::new(7, ASSISTANT_ROLE, "United UA835 is best fit, 20% off if booked now. Synced to group calendar, want me to help book?", 9600).with_tool(Search),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_shape() {
        let all = scenarios();
        let names: Vec<&str> = all.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Research", "Marketing", "Debugging", "Travel"]);
        for scenario in &all {
            assert_eq!(scenario.online_count(), 4);
            assert_eq!(scenario.script.len(), 7);
            assert!(scenario
                .script
                .windows(2)
                .all(|pair| pair[0].delay_ms < pair[1].delay_ms));
            for line in &scenario.script {
                assert!(scenario.persona(line.role).is_some(), "{} has no persona", line.role);
            }
        }
    }

    #[test]
    fn test_tool_labels() {
        assert_eq!(DemoTool::Rag.badge(), "Memory");
        assert_eq!(DemoTool::Search.progress_label(), "Searching...");
        assert_eq!(DemoTool::Analyze.progress_label(), "Analyzing...");
    }

    #[test]
    fn test_persona_background() {
        let all = scenarios();
        let research = &all[0];
        let assistant = research.persona(ASSISTANT_ROLE).expect("assistant persona");
        assert!(assistant.background().starts_with("linear-gradient"));
        let user = research.persona(USER_ROLE).expect("user persona");
        assert_eq!(user.background(), "#3b82f6");
    }
}
