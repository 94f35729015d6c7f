//! Instruction texts sent to the completion API.
//!
//! The difficulty and topic fragments are spliced into
//! [`SYSTEM_PROMPT_TEMPLATE`] to build the chat persona. The translate and
//! furigana instructions are used as-is.

use std::collections::HashMap;
use std::sync::LazyLock;

const BEGINNER_PROMPT: &str = "
# Difficulty: Beginner
# Persona: You are a Japanese friend of a Korean person learning Japanese. Please speak in easy Japanese at a kindergarten level.
- Use mainly hiragana and katakana
- Use simple words and short sentences. Keep responses to 1-2 sentences.
- Use polite form (です・ます form)
";

const INTERMEDIATE_PROMPT: &str = "
# Difficulty: Intermediate
# Persona: You are a Japanese friend of a Korean person learning Japanese. Please speak in natural Japanese at a middle school level.
- Use kanji moderately (include readings)
- Use everyday conversational expressions
- Use polite and casual speech appropriately depending on the situation
- If there are grammar mistakes, naturally guide them to the correct expression
- Avoid long responses, keep it to 2-3 sentences";

const ADVANCED_PROMPT: &str = "
# Difficulty: Advanced
# Persona: You are a Japanese friend of a Korean person learning Japanese. Please speak in natural and sophisticated Japanese at a high school level.
- Use native-level expressions
- Use idioms and slang appropriately
- Include business Japanese and honorific expressions
- Suggest more natural expressions when available";

/// Placeholders: `{partner_name}`, `{difficulty_prompt}`, `{topic_prompt}`.
pub const SYSTEM_PROMPT_TEMPLATE: &str = r#"Your name is "{partner_name}". You are a Japanese person in your 20s living in Japan.
{difficulty_prompt}

Conversation Topic: {topic_prompt}

Important Rules:
- Have a natural conversation like a friend with a Korean Japanese learner
- Occasionally ask questions to keep the conversation going
- If the other person's Japanese is incorrect, naturally respond with the correct expression
- Use emojis moderately to create a friendly atmosphere
- Always respond in Japanese"#;

pub const TRANSLATE_PROMPT: &str = "You are a translator. \
Please translate the given Japanese into Korean. Output only the translation.";

pub const FURIGANA_PROMPT: &str = "Please add furigana to the given Japanese sentence.
Display the reading in hiragana next to the kanji.
Format: Kanji(furigana)
Example: 今日(きょう)は天気(てんき)がいいですね。";

const FREE_TOPIC: &str = "Feel free to talk about anything.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    Free,
    DailyLife,
    Travel,
    Food,
    Culture,
    Business,
    Anime,
}

impl Topic {
    pub const ALL: [Topic; 7] = [
        Self::Free,
        Self::DailyLife,
        Self::Travel,
        Self::Food,
        Self::Culture,
        Self::Business,
        Self::Anime,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "free" => Some(Self::Free),
            "dailyLife" => Some(Self::DailyLife),
            "travel" => Some(Self::Travel),
            "food" => Some(Self::Food),
            "culture" => Some(Self::Culture),
            "business" => Some(Self::Business),
            "anime" => Some(Self::Anime),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::DailyLife => "dailyLife",
            Self::Travel => "travel",
            Self::Food => "food",
            Self::Culture => "culture",
            Self::Business => "business",
            Self::Anime => "anime",
        }
    }
}

/// Read-only fragment tables plus the template that joins them.
#[derive(Debug)]
pub struct PromptTemplateSet {
    difficulty: HashMap<Difficulty, &'static str>,
    topic: HashMap<Topic, &'static str>,
    template: &'static str,
}

static TEMPLATES: LazyLock<PromptTemplateSet> = LazyLock::new(PromptTemplateSet::new);

impl PromptTemplateSet {
    fn new() -> Self {
        let difficulty = HashMap::from([
            (Difficulty::Beginner, BEGINNER_PROMPT),
            (Difficulty::Intermediate, INTERMEDIATE_PROMPT),
            (Difficulty::Advanced, ADVANCED_PROMPT),
        ]);
        let topic = HashMap::from([
            (Topic::Free, FREE_TOPIC),
            (
                Topic::DailyLife,
                "Talk about daily life. (From waking up in the morning to going to bed)",
            ),
            (
                Topic::Travel,
                "Talk about traveling in Japan. (Tourist spots, transportation, accommodation, etc.)",
            ),
            (Topic::Food, "Talk about Japanese food and cooking."),
            (
                Topic::Culture,
                "Talk about Japanese culture. (Festivals, customs, traditions, etc.)",
            ),
            (
                Topic::Business,
                "Have a conversation in business Japanese. (Meetings, phone calls, emails, etc.)",
            ),
            (Topic::Anime, "Talk about anime and manga."),
        ]);
        Self {
            difficulty,
            topic,
            template: SYSTEM_PROMPT_TEMPLATE,
        }
    }

    /// The process-wide table, built on first access and never mutated.
    pub fn global() -> &'static Self {
        &TEMPLATES
    }

    /// Fragment for a wire key; unknown keys get the beginner fragment.
    pub fn difficulty_fragment(&self, key: &str) -> &'static str {
        let tier = Difficulty::from_key(key).unwrap_or(Difficulty::Beginner);
        self.difficulty
            .get(&tier)
            .copied()
            .unwrap_or(BEGINNER_PROMPT)
    }

    /// Fragment for a wire key; unknown keys get the free-talk fragment.
    pub fn topic_fragment(&self, key: &str) -> &'static str {
        let topic = Topic::from_key(key).unwrap_or(Topic::Free);
        self.topic.get(&topic).copied().unwrap_or(FREE_TOPIC)
    }

    /// Builds the persona instruction for a chat turn. Never fails.
    pub fn compose_system_instruction(
        &self,
        partner_name: &str,
        difficulty: &str,
        topic: &str,
    ) -> String {
        // partner name goes in last so its text is never treated as a placeholder
        self.template
            .replace("{difficulty_prompt}", self.difficulty_fragment(difficulty))
            .replace("{topic_prompt}", self.topic_fragment(topic))
            .replace("{partner_name}", partner_name)
    }
}

/// Shorthand for [`PromptTemplateSet::compose_system_instruction`] on the global table.
pub fn compose_system_instruction(partner_name: &str, difficulty: &str, topic: &str) -> String {
    PromptTemplateSet::global().compose_system_instruction(partner_name, difficulty, topic)
}
