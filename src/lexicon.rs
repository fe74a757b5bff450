//! Versioned constant tables driving the matching pipeline.
//!
//! These lists are load-bearing: keyword recall and coverage quality depend
//! on their exact contents, so edits should bump [`LEXICON_VERSION`] and be
//! validated against real postings rather than trimmed for tidiness.

use std::collections::HashSet;
use std::sync::OnceLock;

pub const LEXICON_VERSION: &str = "1";

/// Combined English/Spanish stopwords used when tokenizing profiles and
/// job descriptions.
pub const STOPWORDS: &[&str] = &[
    // English
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does",
    "doesn't", "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had",
    "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her",
    "here", "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd",
    "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself",
    "let's", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off",
    "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over",
    "own", "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so",
    "some", "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves",
    "then", "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't",
    "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when",
    "when's", "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's",
    "with", "won't", "would", "wouldn't",
    // Spanish
    "ya", "y", "al", "algo", "alguna", "algunas", "alguno", "algunos", "ante", "antes", "como",
    "con", "contra", "cual", "cuales", "cuando", "de", "del", "desde", "donde", "dos", "el",
    "él", "ella", "ellas", "ellos", "en", "entre", "era", "erais", "eramos", "eran", "es",
    "esa", "esas", "ese", "esos", "esta", "estaba", "estabais", "estabamos", "estaban",
    "estado", "estais", "estamos", "estan", "estar", "está", "este", "esto", "estos", "fue",
    "fuera", "fueron", "fui", "fuimos", "ha", "habeis", "había", "habíais", "habíamos",
    "habían", "han", "hasta", "hay", "la", "las", "le", "les", "lo", "los", "mas", "más",
    "mí", "mi", "mia", "mía", "mías", "mio", "mío", "míos", "mis", "mucha", "muchas", "mucho",
    "muchos", "muy", "nada", "ni", "nos", "nosotras", "nosotros", "nuestra", "nuestras",
    "nuestro", "nuestros", "o", "os", "otra", "otras", "otro", "otros", "para", "pero",
    "poco", "por", "porque", "que", "quien", "quién", "quienes", "se", "sea", "segun",
    "según", "ser", "si", "sí", "sido", "sin", "sino", "somos", "son", "soy", "su", "sus",
    "también", "tampoco", "te", "ti", "tiene", "tienen", "toda", "todas", "todo", "todos",
    "tú", "tus", "tuya", "tuyas", "tuyo", "tuyos", "un", "una", "uno", "unos", "usted",
    "ustedes",
];

/// Job-posting boilerplate filtered out of missing-keyword suggestions on
/// top of [`STOPWORDS`].
pub const EXTENDED_STOPWORDS: &[&str] = &[
    "you", "work", "experience", "use", "allowance", "end", "interested", "working",
    "have", "will", "are", "can", "should", "would", "could", "may", "might",
    "this", "that", "these", "those", "your", "our", "their", "company",
    "team", "role", "position", "job", "career", "opportunity", "environment",
    "fast", "paced", "high", "growth", "startup", "scaleup", "dynamic",
    "looking", "hire", "join", "build", "create", "develop", "design",
    "problem", "solution", "challenge", "project", "feature", "service",
    "aim", "supercharge", "requests", "handles", "ingest", "process", "maintaining",
    "ship", "meaningfully", "propel", "forward", "recognize", "impact",
    "own", "including", "deployment", "monitoring", "got", "per",
    "write", "production", "ready", "well", "tested", "code", "first", "week",
    "driven", "close", "customer", "performing", "experiments", "nearly",
    "everything", "launch", "combination", "across", "multiple", "services",
    "codebases", "state", "art", "powered", "primarily", "written", "frontend",
    "storage", "caching", "version", "control", "infrastructure", "hosted",
    "takes", "under", "minutes", "merged", "reach", "invest", "heavily",
    "automated", "alerting", "using", "datadog", "amplitude", "client", "side",
    "metrics", "experimentation", "snowflake", "warehouse", "least", "months",
    "web", "development", "preferably", "exposure", "modern", "framework",
    "servers", "learn", "quickly", "regardless", "languages", "technologies",
    "taking", "ownership", "shipping", "entire", "features", "thrive", "decoding",
    "intricate", "problems", "logical", "reasoned", "solutions",
    "help", "lives", "maximize", "started", "engineering", "interns", "software",
    "both", "employees", "customers", "everyone", "offer",
    "promise", "unlock", "potential", "learning", "celebrated",
    "realized", "than", "tech",
    "care", "people", "take", "seriously", "progression", "ubereats", "alignment",
    "aspects", "available", "compensation", "components", "data", "pay", "based", "direct",
    "business", "challenging", "completed", "day", "equal", "great", "number", "used", "one",
    "past", "projects", "structured", "understanding",
    "policies", "systems", "tools", "platforms", "architecture",
    "successfully", "structure", "talent", "talented", "levels", "utilize", "resources", "prior",
    "term", "terms", "techincality",
];

/// Bidirectional skill synonym table: `(skill, variants)`. Unknown skills
/// expand to themselves only.
pub const SKILL_SYNONYMS: &[(&str, &[&str])] = &[
    ("js", &["javascript"]),
    ("javascript", &["js"]),
    ("react", &["reactjs", "react.js"]),
    ("reactjs", &["react", "react.js"]),
    ("react.js", &["react", "reactjs"]),
    ("nextjs", &["next.js", "next"]),
    ("next.js", &["nextjs", "next"]),
    ("next", &["nextjs", "next.js"]),
    ("node", &["nodejs", "node.js"]),
    ("nodejs", &["node", "node.js"]),
    ("node.js", &["node", "nodejs"]),
    ("html", &["html5"]),
    ("html5", &["html"]),
    ("css", &["css3"]),
    ("css3", &["css"]),
    ("sql", &["mysql", "postgresql", "postgres"]),
    ("mysql", &["sql"]),
    ("postgresql", &["sql", "postgres"]),
    ("postgres", &["sql", "postgresql"]),
    ("git", &["github", "gitlab"]),
    ("github", &["git"]),
    ("gitlab", &["git"]),
    ("aws", &["amazon web services"]),
    ("amazon web services", &["aws"]),
    ("azure", &["microsoft azure"]),
    ("microsoft azure", &["azure"]),
    ("gcp", &["google cloud platform", "google cloud"]),
    ("google cloud platform", &["gcp", "google cloud"]),
    ("google cloud", &["gcp", "google cloud platform"]),
    ("mongodb", &["mongo"]),
    ("mongo", &["mongodb"]),
    ("typescript", &["ts"]),
    ("ts", &["typescript"]),
    ("django", &["django framework"]),
    ("flask", &["flask framework"]),
    ("database", &["databases", "db"]),
    ("intern", &["internship", "interning", "internships"]),
];

/// Category prefixes that mark a line of skill text as
/// `"<category>: <skills>"`.
pub const SKILL_CATEGORY_PREFIXES: &[&str] =
    &["language", "framework", "library", "tool", "technology", "skill"];

/// Filler fragments dropped while parsing skill lists.
pub const SKILL_FILLER_WORDS: &[&str] = &["on", "to", "in", "of", "and", "or"];

/// Technical terms whose presence in a candidate keyword triples its
/// relevance weight.
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "javascript", "python", "java", "react", "reactjs", "angular", "vue", "node", "nodejs", "sql",
    "html", "css", "docker", "kubernetes", "aws", "azure", "gcp", "git", "github", "gitlab",
    "api", "rest", "graphql", "database", "frontend", "backend", "fullstack", "full-stack",
    "machine learning", "ai", "data science", "analytics", "agile", "scrum",
    "typescript", "ts", "php", "ruby", "go", "rust", "django", "flask", "express",
    "mongodb", "mongo", "mysql", "postgresql", "postgres", "redis", "elasticsearch",
    "jenkins", "ci/cd", "cicd", "terraform", "ansible", "linux", "fastapi", "microservices",
    "testing", "debugging", "monitoring", "deployment", "production", "infrastructure",
    "architecture", "performance", "scalability", "security", "authentication",
    "authorization", "optimization", "integration", "automation", "containerization",
];

/// Domain words earning a 2x relevance weight.
pub const DOMAIN_TERMS: &[&str] = &[
    "web", "mobile", "cloud", "devops", "fullstack", "backend", "frontend",
    "database", "server", "client", "framework", "library", "tool",
];

/// Substrings that disqualify a missing-keyword candidate outright.
pub const KEYWORD_FILLER_SUBSTRINGS: &[&str] =
    &["you", "work", "experience", "use", "allowance", "interested"];

/// Relaxed variant used by the backfill pass.
pub const BACKFILL_FILLER_SUBSTRINGS: &[&str] =
    &["you", "work", "experience", "use", "allowance"];

/// Fixed technical-skill vocabulary scanned against job descriptions by the
/// coverage analyzer. Multi-token entries only ever match multi-token
/// profile skills, never single JD tokens.
pub const SKILL_VOCABULARY: &[&str] = &[
    "javascript", "python", "java", "react", "reactjs", "angular", "vue", "node", "nodejs", "sql",
    "html", "css", "docker", "kubernetes", "aws", "azure", "gcp", "git", "github", "gitlab",
    "api", "rest", "graphql", "database", "frontend", "backend", "fullstack", "full-stack",
    "machine learning", "ai", "data science", "analytics", "agile", "scrum",
    "typescript", "ts", "php", "ruby", "go", "rust", "c++", "c#", ".net", "spring",
    "django", "flask", "express", "mongodb", "mongo", "mysql", "postgresql", "postgres", "redis",
    "elasticsearch", "jenkins", "ci/cd", "cicd", "terraform", "ansible", "linux",
    "unix", "bash", "powershell", "figma", "sketch", "adobe", "photoshop",
    "nextjs", "next.js", "fastapi", "microservices",
];

fn stopword_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

fn extended_stopword_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        STOPWORDS
            .iter()
            .chain(EXTENDED_STOPWORDS.iter())
            .copied()
            .collect()
    })
}

pub fn is_stopword(token: &str) -> bool {
    stopword_set().contains(token)
}

pub fn is_extended_stopword(token: &str) -> bool {
    extended_stopword_set().contains(token)
}

/// Variants listed for a skill, or `None` for skills outside the table.
pub fn synonym_variants(skill: &str) -> Option<&'static [&'static str]> {
    SKILL_SYNONYMS
        .iter()
        .find(|(key, _)| *key == skill)
        .map(|(_, variants)| *variants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_bilingual() {
        assert!(is_stopword("the"));
        assert!(is_stopword("aren't"));
        assert!(is_stopword("para"));
        assert!(is_stopword("según"));
        assert!(!is_stopword("python"));
    }

    #[test]
    fn test_extended_stopwords_include_base() {
        assert!(is_extended_stopword("the"));
        assert!(is_extended_stopword("opportunity"));
        assert!(is_extended_stopword("deployment"));
        assert!(!is_extended_stopword("kubernetes"));
    }

    #[test]
    fn test_synonym_table_is_bidirectional() {
        assert!(synonym_variants("js").unwrap().contains(&"javascript"));
        assert!(synonym_variants("javascript").unwrap().contains(&"js"));
        assert!(synonym_variants("postgres").unwrap().contains(&"sql"));
        assert!(synonym_variants("cobol").is_none());
    }

    #[test]
    fn test_vocabulary_has_no_duplicates() {
        let mut seen = HashSet::new();
        for skill in SKILL_VOCABULARY {
            assert!(seen.insert(*skill), "duplicate vocabulary entry: {skill}");
        }
    }
}
