// Fixed heuristic vocabularies for the extraction pipeline.
// None of these are runtime-configurable.

/// Header keywords tried in order when locating each section.
pub const SKILLS_HEADERS: &[&str] = &["skills", "technical skills", "core competencies"];
pub const EXPERIENCE_HEADERS: &[&str] = &["work experience", "experience", "employment"];
pub const EDUCATION_HEADERS: &[&str] = &["education", "academic", "qualification"];

/// Closed set of header terms that end a located section.
pub const SECTION_BOUNDARIES: &[&str] = &[
    "work experience",
    "experience",
    "education",
    "skills",
    "technical skills",
    "projects",
    "personal projects",
    "achievements",
    "interests",
    "summary",
    "profile",
    "objective",
    "about",
];

/// Phrases that end the summary body, searched in this priority order.
pub const SUMMARY_STOPS: &[&str] = &[
    "technical skills",
    "backend:",
    "frontend:",
    "cloud/",
    "databases",
    "authentication",
    "tools:",
    "testing:",
    "ai tools:",
    "soft skills:",
    "experience:",
    "work experience",
];

pub const SUMMARY_MAX_CHARS: usize = 350;
/// A period at or before this offset is too early to cut a capped summary at.
pub const SUMMARY_MIN_SENTENCE_CUT: usize = 100;
pub const SUMMARY_MIN_CHARS: usize = 20;
pub const ELLIPSIS: &str = "...";

/// Lines containing any of these (case-insensitive) are never taken as the name.
pub const NAME_DISQUALIFIERS: &[&str] = &["@", "http", "linkedin", "github", "summary"];
pub const NAME_LOCATION_TOKENS: &[&str] = &["india", "united states"];
pub const NAME_SCAN_LINES: usize = 5;
pub const NAME_MAX_LINE_CHARS: usize = 100;
/// First lines longer than this are treated as a single-line text dump.
pub const DEGENERATE_LINE_CHARS: usize = 200;

pub const EXPERIENCE_SCAN_LINES: usize = 15;
pub const EXPERIENCE_DESCRIPTION_LINES: usize = 3;
pub const EXPERIENCE_CAP: usize = 3;
pub const EXPERIENCE_HEADER_WORDS: &[&str] = &["experience", "employment"];

pub const EDUCATION_SCAN_LINES: usize = 10;
pub const EDUCATION_CAP: usize = 2;
pub const EDUCATION_HEADER_WORDS: &[&str] = &["education", "academic"];
pub const DEGREE_MARKERS: &[&str] = &["university", "college", "bachelor", "master", "degree"];

/// Skill names matched case-insensitively against the skills section.
/// Results keep this order, not the order of the source text.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "Ruby",
    "Go",
    "Rust",
    "Kotlin",
    "Swift",
    "PHP",
    // Frontend
    "React",
    "Next.js",
    "Angular",
    "Vue",
    "Svelte",
    "Redux",
    "HTML",
    "CSS",
    "Sass",
    "Tailwind",
    "Bootstrap",
    // Backend
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "FastAPI",
    "Spring",
    "Laravel",
    // Data
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "SQL",
    "Firebase",
    "Supabase",
    "Prisma",
    // Cloud / DevOps
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Jenkins",
    "Nginx",
    "Linux",
    "Vercel",
    // Auth
    "JWT",
    "OAuth",
    // Testing
    "Jest",
    "Cypress",
    // ML / AI
    "TensorFlow",
    "PyTorch",
    "Pandas",
    "NumPy",
    "LangChain",
    "OpenAI",
    // Practice
    "Git",
    "CI/CD",
    "Agile",
    "Scrum",
    "REST",
    "GraphQL",
    "API",
    "Microservices",
    "Figma",
];

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_SUMMARY: &str = "Passionate professional dedicated to building impactful solutions and continuously learning new technologies.";
pub const DEFAULT_SKILLS: &[&str] = &["Web Development", "Programming", "Software Engineering"];

pub const PLACEHOLDER_TITLE: &str = "Software Developer";
pub const PLACEHOLDER_COMPANY: &str = "Tech Company";
pub const PLACEHOLDER_DURATION: &str = "2020 - Present";
pub const PLACEHOLDER_DESCRIPTION: &str = "Working on exciting projects";

pub const PLACEHOLDER_DEGREE: &str = "Bachelor of Science in Computer Science";
pub const PLACEHOLDER_INSTITUTION: &str = "University";
pub const PLACEHOLDER_YEAR: &str = "2020";
