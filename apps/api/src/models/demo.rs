//! Built-in records: the demo portfolio and the canned generation output.

use crate::models::profile::{
    Education, Experience, ProfileRecord, Project, SkillCategory, SkillIcon,
};

/// Identifier the intake page links to for the demo portfolio.
pub const DEMO_PORTFOLIO_ID: &str = "demo-alex-johnson-123";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed record rendered whenever a requested portfolio is not stored.
pub fn demo_record() -> ProfileRecord {
    ProfileRecord {
        name: "Alex Johnson".to_string(),
        title: "Full Stack Developer".to_string(),
        summary: "Passionate software developer with 5+ years of experience building scalable \
                  web applications. Expertise in React, Node.js, and cloud technologies."
            .to_string(),
        email: Some("alex.johnson@email.com".to_string()),
        phone: Some("+1 (555) 123-4567".to_string()),
        location: Some("San Francisco, CA".to_string()),
        photo: None,
        experience: vec![
            Experience {
                company: "TechCorp Inc.".to_string(),
                role: "Senior Full Stack Developer".to_string(),
                start_date: "2022".to_string(),
                end_date: "Present".to_string(),
                description: "Lead development of enterprise web applications serving 100k+ \
                              users. Implemented microservices architecture reducing system \
                              latency by 40%."
                    .to_string(),
            },
            Experience {
                company: "StartupXYZ".to_string(),
                role: "Software Engineer".to_string(),
                start_date: "2020".to_string(),
                end_date: "2022".to_string(),
                description: "Built scalable React applications and REST APIs. Collaborated \
                              with cross-functional teams to deliver high-quality software \
                              solutions."
                    .to_string(),
            },
        ],
        projects: vec![
            Project {
                name: "E-commerce Platform".to_string(),
                description: "Full-stack e-commerce solution with React, Node.js, and \
                              PostgreSQL. Features include payment processing, inventory \
                              management, and admin dashboard."
                    .to_string(),
                technologies: strings(&["React", "Node.js", "PostgreSQL", "Stripe"]),
                demo: Some("https://ecommerce-demo.vercel.app".to_string()),
                github: Some("https://github.com/alexjohnson/ecommerce".to_string()),
            },
            Project {
                name: "Task Management App".to_string(),
                description: "Real-time collaborative task management application with \
                              drag-and-drop functionality and team collaboration features."
                    .to_string(),
                technologies: strings(&["React", "Socket.io", "MongoDB"]),
                demo: Some("https://taskapp-demo.com".to_string()),
                github: Some("https://github.com/alexjohnson/taskapp".to_string()),
            },
        ],
        skill_categories: vec![
            SkillCategory {
                name: "Frontend".to_string(),
                icon: SkillIcon::Code,
                skills: strings(&[
                    "React",
                    "Vue.js",
                    "TypeScript",
                    "JavaScript",
                    "HTML/CSS",
                    "Tailwind CSS",
                ]),
            },
            SkillCategory {
                name: "Backend".to_string(),
                icon: SkillIcon::Server,
                skills: strings(&["Node.js", "Python", "Express.js", "REST APIs", "GraphQL"]),
            },
            SkillCategory {
                name: "DevOps & Cloud".to_string(),
                icon: SkillIcon::Cloud,
                skills: strings(&["AWS", "Docker", "Kubernetes", "CI/CD", "MongoDB", "PostgreSQL"]),
            },
        ],
        soft_skills: strings(&[
            "Gaming",
            "Music Production",
            "Photography",
            "Cooking",
            "Traveling",
            "Reading",
        ]),
        education: vec![berkeley()],
    }
}

/// The hard-coded record the simulated extractor produces for every upload.
pub fn canned_record() -> ProfileRecord {
    ProfileRecord {
        name: "Alex Johnson".to_string(),
        title: "Full Stack Developer".to_string(),
        summary: "Passionate software developer with 5+ years of experience building scalable \
                  web applications."
            .to_string(),
        email: Some("alex.johnson@email.com".to_string()),
        phone: Some("+1 (555) 123-4567".to_string()),
        location: Some("San Francisco, CA".to_string()),
        photo: None,
        experience: vec![Experience {
            company: "TechCorp Inc.".to_string(),
            role: "Senior Full Stack Developer".to_string(),
            start_date: "2022".to_string(),
            end_date: "Present".to_string(),
            description: "Lead development of enterprise web applications serving 100k+ users."
                .to_string(),
        }],
        projects: vec![Project {
            name: "E-commerce Platform".to_string(),
            description: "Full-stack e-commerce solution with React, Node.js, and PostgreSQL."
                .to_string(),
            technologies: strings(&["React", "Node.js", "PostgreSQL"]),
            demo: None,
            github: None,
        }],
        skill_categories: vec![SkillCategory {
            name: String::new(),
            icon: SkillIcon::Code,
            skills: strings(&["JavaScript", "React", "Node.js", "Python", "PostgreSQL", "AWS"]),
        }],
        soft_skills: vec![],
        education: vec![berkeley()],
    }
}

fn berkeley() -> Education {
    Education {
        institution: "University of California, Berkeley".to_string(),
        degree: "Bachelor of Science in Computer Science".to_string(),
        year: "2019".to_string(),
    }
}
