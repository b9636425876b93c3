#![forbid(unsafe_code)]

//! Hardcoded portfolio content.
//!
//! All of it is literal data rendered into the view: no I/O, no
//! serialization, no state. Edit here to make the portfolio yours.

/// One hero statistic ("2+ Years Experience").
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

/// One employment entry, newest first.
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

/// One skill with a 0-100 proficiency level.
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// One featured project.
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

/// A contact line.
pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
}

/// The whole profile.
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub stats: &'static [Stat],
    pub about: &'static [&'static str],
    pub education: &'static [&'static str],
    pub experience: &'static [Experience],
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
    pub contact: &'static [ContactItem],
}

/// The profile rendered by the app.
pub const PROFILE: Profile = Profile {
    name: "NIDIN SREENIVASAN",
    title: "Software Engineer 1",
    tagline: "Building scalable solutions with Go, Java, Redis & Cloud Technologies",
    stats: &[
        Stat {
            number: "2+",
            label: "Years Experience",
        },
        Stat {
            number: "8.36",
            label: "CGPA",
        },
        Stat {
            number: "3",
            label: "Companies",
        },
    ],
    about: &[
        "I'm Nidin Sreenivasan (also known as NidinSree), a Software Engineer 1 \
         at Tekion Corp with expertise in Go (Golang), Java, Redis, and cloud \
         technologies. Previously worked at Crayon Data on the maya.ai \
         recommendation engine serving millions of users.",
        "I graduated from Coimbatore Institute of Technology with a CGPA of \
         8.36/10.0 in Computer Science and Engineering. My experience spans \
         from building scalable backend systems to optimizing automation \
         processes that reduce processing time by 75%.",
        "I'm passionate about data structures and algorithms, building \
         efficient solutions, and modern software engineering practices. I've \
         led deployment efforts for major banks and have extensive experience \
         in developing scalable backend systems and high-performance \
         applications.",
    ],
    education: &[
        "Bachelor of Engineering (Computer Science)",
        "Coimbatore Institute of Technology (2019-2023)",
        "CGPA: 8.36/10.0",
    ],
    experience: &[
        Experience {
            role: "Software Engineer 1",
            company: "Tekion Corp",
            location: "Chennai, India",
            period: "May 2024 - Present",
            bullets: &[
                "Developing scalable backend services using Go and microservices architecture",
                "Working with Redis for high-performance caching and data storage",
                "Building robust APIs and services using Java Spring Boot",
                "Implementing Python-based automation and data processing solutions",
            ],
        },
        Experience {
            role: "Associate Software Engineer",
            company: "Crayon Data",
            location: "Chennai, India",
            period: "Aug 2023 - May 2024",
            bullets: &[
                "Contributed to the maya.ai recommendation engine (Spring Boot, ElasticSearch)",
                "Built and optimized the Offer Portal, reducing onboarding time by 50%",
                "Automated third-party API integration, cutting processing from 3h to 45min",
                "Led deployment efforts for two of the largest banks",
            ],
        },
        Experience {
            role: "SDET Intern",
            company: "Quinbay",
            location: "Coimbatore, India",
            period: "Jan 2023 - July 2023",
            bullets: &[
                "Developed automation scripts for daily end-to-end runs on iOS and Android",
                "Improved test coverage from 75% to 95% with Selenium, Appium, Rest Assured",
            ],
        },
    ],
    skills: &[
        Skill {
            name: "Go (Golang)",
            level: 90,
        },
        Skill {
            name: "Java",
            level: 95,
        },
        Skill {
            name: "Spring Boot",
            level: 90,
        },
        Skill {
            name: "Python",
            level: 85,
        },
        Skill {
            name: "Redis",
            level: 85,
        },
        Skill {
            name: "AWS",
            level: 85,
        },
        Skill {
            name: "PostgreSQL",
            level: 80,
        },
        Skill {
            name: "Docker",
            level: 80,
        },
    ],
    projects: &[
        Project {
            title: "maya.ai Recommendation Engine",
            description: "Personalized recommendation engine serving millions of users.",
            tech: &["Java", "Spring Boot", "ElasticSearch", "AWS"],
        },
        Project {
            title: "Offer Portal Optimization",
            description: "Portal that reduced offer onboarding time by 50% for \
                          multi-stakeholder teams.",
            tech: &["Java", "Spring Boot", "PostgreSQL", "AWS"],
        },
        Project {
            title: "Grocery App - Microservices",
            description: "Microservices-architecture grocery application built with \
                          modern Java technologies.",
            tech: &["Java", "Spring Boot", "Microservices", "Docker"],
        },
        Project {
            title: "Academic Assistant NLP Chatbot",
            description: "NLP chatbot providing academic support and improving student \
                          engagement.",
            tech: &["Python", "NLP", "Machine Learning", "TensorFlow"],
        },
        Project {
            title: "Aspect Mining on Confectionary Products",
            description: "Sentiment analysis and aspect-based mining of consumer \
                          preferences.",
            tech: &["Python", "NLP", "Sentiment Analysis", "Data Mining"],
        },
    ],
    contact: &[
        ContactItem {
            label: "Email",
            value: "nidin2505@gmail.com",
        },
        ContactItem {
            label: "LinkedIn",
            value: "linkedin.com/in/nidin-sree-a4a079193",
        },
        ContactItem {
            label: "Location",
            value: "Coimbatore, India",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        assert!(PROFILE.skills.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn every_experience_has_bullets() {
        assert!(PROFILE.experience.iter().all(|e| !e.bullets.is_empty()));
    }

    #[test]
    fn profile_sections_nonempty() {
        assert!(!PROFILE.about.is_empty());
        assert!(!PROFILE.projects.is_empty());
        assert!(!PROFILE.contact.is_empty());
    }
}
