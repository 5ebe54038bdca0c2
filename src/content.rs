#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    React,
    JavaScript,
    NodeJs,
    Express,
    MongoDb,
    Azure,
    Email,
    LinkedIn,
    GitHub,
    Twitter,
    ExternalLink,
    Handshake,
    Rocket,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Self::React => "devicon-react-original",
            Self::JavaScript => "devicon-javascript-plain",
            Self::NodeJs => "devicon-nodejs-plain",
            Self::Express => "devicon-express-original",
            Self::MongoDb => "devicon-mongodb-plain",
            Self::Azure => "devicon-azure-plain",
            Self::Email => "extra-email",
            Self::LinkedIn => "devicon-linkedin-plain",
            Self::GitHub => "devicon-github-plain",
            Self::Twitter => "devicon-twitter-original",
            Self::ExternalLink => "extra-link",
            Self::Handshake => "extra-handshake",
            Self::Rocket => "extra-rocket",
        }
    }
}

pub struct HeroCopy {
    pub greeting: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

pub const HERO: HeroCopy = HeroCopy {
    greeting: "Welcome to my portfolio",
    name: "Tharsan",
    role: "Full Stack Developer",
    description: "I create exceptional digital experiences through innovative web solutions. Specializing in modern web technologies and creative problem-solving.",
};

pub struct Highlight {
    pub heading: &'static str,
    pub body: &'static str,
}

pub struct AboutCopy {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub highlights: [Highlight; 2],
}

pub const ABOUT: AboutCopy = AboutCopy {
    image: "/images/profile.jpg",
    title: "About Me",
    subtitle: "Crafting Digital Experiences",
    description: "I'm a passionate full-stack developer with a keen eye for design and a love for creating seamless user experiences. With expertise in modern web technologies, I bring ideas to life through clean, efficient code and intuitive interfaces.",
    highlights: [
        Highlight {
            heading: "My Approach",
            body: "I believe in creating solutions that not only solve problems but also delight users. Every project is an opportunity to push boundaries and learn something new.",
        },
        Highlight {
            heading: "What I Bring",
            body: "A blend of technical expertise and creative problem-solving, coupled with a commitment to delivering high-quality, scalable solutions that make a difference.",
        },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillItem {
    pub name: &'static str,
    pub icon: Icon,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub skills: &'static [SkillItem],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        key: "frontend",
        title: "Frontend Development",
        skills: &[
            SkillItem {
                name: "React",
                icon: Icon::React,
                level: 85,
            },
            SkillItem {
                name: "JavaScript",
                icon: Icon::JavaScript,
                level: 80,
            },
        ],
    },
    SkillCategory {
        key: "backend",
        title: "Backend Development",
        skills: &[
            SkillItem {
                name: "Node.js",
                icon: Icon::NodeJs,
                level: 88,
            },
            SkillItem {
                name: "Express.js",
                icon: Icon::Express,
                level: 88,
            },
        ],
    },
    SkillCategory {
        key: "database",
        title: "Database & Storage",
        skills: &[
            SkillItem {
                name: "MongoDB",
                icon: Icon::MongoDb,
                level: 85,
            },
            SkillItem {
                name: "Azure",
                icon: Icon::Azure,
                level: 75,
            },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub code_url: &'static str,
    pub demo_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Password Generator",
        description: "A front-end password generator creates strong, random passwords to enhance security through a user-friendly interface.",
        image: "/images/projects/project-ecommerce.jpg",
        tech: &["Html", "Css", "Javascript"],
        code_url: "https://github.com/yourusername/ecommerce",
        demo_url: "https://ecommerce-demo.com",
    },
    Project {
        id: 2,
        title: "AI-Powered Chatbot",
        description: "An intelligent chatbot using natural language processing to provide customer support and engagement.",
        image: "/images/projects/project-chatbot.jpg",
        tech: &["Html", "Css", "Javascript"],
        code_url: "https://github.com/yourusername/chatbot",
        demo_url: "https://chatbot-demo.com",
    },
    Project {
        id: 3,
        title: "Developer Kit",
        description: "A developer kit, also known as a software development kit (SDK), is a collection of tools, libraries, documentation, and sample code that helps developers build, test, and deploy applications for a specific platform or framework.",
        image: "/images/projects/project-devops.jpg",
        tech: &["Html", "Css", "Javascript"],
        code_url: "https://github.com/yourusername/devops",
        demo_url: "https://devops-demo.com",
    },
    Project {
        id: 4,
        title: "Weather Prediction",
        description: "Interactive dashboard for visualizing complex datasets with real-time updates and filtering.",
        image: "/images/projects/project-data-viz.jpg",
        tech: &["D3.js", "React", "Node.js", "PostgreSQL"],
        code_url: "https://github.com/yourusername/data-viz",
        demo_url: "https://data-viz-demo.com",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: Icon,
    pub url: &'static str,
    pub accent: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Email",
        icon: Icon::Email,
        url: "mailto:your.email@gmail.com",
        accent: "#EA4335",
    },
    SocialLink {
        name: "LinkedIn",
        icon: Icon::LinkedIn,
        url: "https://linkedin.com/in/your-profile",
        accent: "#0077B5",
    },
    SocialLink {
        name: "GitHub",
        icon: Icon::GitHub,
        url: "https://github.com/your-username",
        accent: "#333",
    },
    SocialLink {
        name: "Twitter",
        icon: Icon::Twitter,
        url: "https://twitter.com/your-handle",
        accent: "#1DA1F2",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_are_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_outbound_links_are_absolute() {
        for p in PROJECTS {
            assert!(p.code_url.starts_with("https://"), "{}", p.title);
            assert!(p.demo_url.starts_with("https://"), "{}", p.title);
            assert!(!p.tech.is_empty());
        }
        for s in SOCIAL_LINKS {
            assert!(
                s.url.starts_with("https://") || s.url.starts_with("mailto:"),
                "{}",
                s.name
            );
            assert!(s.accent.starts_with('#'));
        }
    }

    #[test]
    fn test_extra_icons_have_glyphs() {
        let css = include_str!("../input.css");
        let icons = [
            Icon::React,
            Icon::JavaScript,
            Icon::NodeJs,
            Icon::Express,
            Icon::MongoDb,
            Icon::Azure,
            Icon::Email,
            Icon::LinkedIn,
            Icon::GitHub,
            Icon::Twitter,
            Icon::ExternalLink,
            Icon::Handshake,
            Icon::Rocket,
        ];
        for icon in icons {
            let class = icon.class();
            assert!(
                class.starts_with("devicon-") || css.contains(&format!(".{class} {{")),
                "{class} has no glyph"
            );
        }
    }

    #[test]
    fn test_skill_categories_have_skills() {
        let keys = SKILL_CATEGORIES.iter().map(|c| c.key).collect::<HashSet<_>>();
        assert_eq!(keys.len(), SKILL_CATEGORIES.len());
        assert!(SKILL_CATEGORIES.iter().all(|c| !c.skills.is_empty()));
    }
}
