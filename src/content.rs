use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Strong,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Strong => "Strong",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "level-beginner",
            SkillLevel::Intermediate => "level-intermediate",
            SkillLevel::Strong => "level-strong",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub level: SkillLevel,
    pub percent: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [SkillEntry],
}

impl SkillCategory {
    pub fn key_for(&self, index: usize) -> SkillKey {
        SkillKey {
            category: self.key,
            index,
        }
    }
}

/// Identifies one skill row as `<category>-<index>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SkillKey {
    pub category: &'static str,
    pub index: usize,
}

impl fmt::Display for SkillKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.index)
    }
}

pub type ProjectId = &'static str;

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectEntry {
    pub id: ProjectId,
    pub title: &'static str,
    pub featured: bool,
    pub short_desc: &'static str,
    pub tech: &'static [&'static str],
    pub problem: &'static str,
    pub solution: &'static str,
    pub impact: &'static str,
    pub features: &'static [&'static str],
    pub github: &'static str,
    /// Empty when the project has no live deployment.
    pub demo: &'static str,
}

impl ProjectEntry {
    pub fn has_demo(&self) -> bool {
        !self.demo.trim().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AchievementEntry {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SoftSkill {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EducationEntry {
    pub title: &'static str,
    pub institution: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub period: &'static str,
    pub document: &'static str,
}

pub struct Profile {
    pub name: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub github_label: &'static str,
    pub linkedin_url: &'static str,
    pub linkedin_label: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Prashant Kumar",
    first_name: "Prashant",
    last_name: "Kumar",
    initials: "PK",
    role: "Full-Stack Developer",
    summary: "Computer Science student building full-stack web applications using React, Node.js, and MongoDB. Actively seeking internship opportunities in software development.",
    email: "pk1819544@gmail.com",
    github_url: "https://github.com/Prashant730",
    github_label: "github.com/Prashant730",
    linkedin_url: "https://www.linkedin.com/in/prashant-kumar-r13/",
    linkedin_label: "linkedin.com/in/prashant-kumar-r13",
};

pub const QUICK_FACTS: &[(&str, &str)] = &[
    ("🎓", "Expected Graduation: 2027"),
    ("📍", "Open to Remote & On-site opportunities"),
    ("💼", "Open to Internship & Full-time roles"),
];

const BACKEND: &[SkillEntry] = &[
    SkillEntry { name: "Node.js / Express", level: SkillLevel::Strong, percent: 90 },
    SkillEntry { name: "Java / Spring Boot", level: SkillLevel::Intermediate, percent: 60 },
    SkillEntry { name: "REST API Design", level: SkillLevel::Strong, percent: 85 },
];

const FRONTEND: &[SkillEntry] = &[
    SkillEntry { name: "React", level: SkillLevel::Strong, percent: 90 },
    SkillEntry { name: "JavaScript / TypeScript", level: SkillLevel::Strong, percent: 88 },
    SkillEntry { name: "HTML/CSS & Tailwind", level: SkillLevel::Strong, percent: 92 },
];

const TOOLS: &[SkillEntry] = &[
    SkillEntry { name: "Git & GitHub", level: SkillLevel::Strong, percent: 88 },
    SkillEntry { name: "MongoDB", level: SkillLevel::Intermediate, percent: 65 },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory { key: "backend", title: "Backend", icon: "🖥️", skills: BACKEND },
    SkillCategory { key: "frontend", title: "Frontend", icon: "🎨", skills: FRONTEND },
    SkillCategory { key: "tools", title: "Tools & Platforms", icon: "🛠️", skills: TOOLS },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: "bidmaster",
        title: "BidMaster",
        featured: true,
        short_desc: "Real-time auction platform with live bidding, role-based access, and admin controls.",
        tech: &["React 19", "Node.js", "MongoDB", "Socket.IO", "JWT", "Tailwind CSS"],
        problem: "Online auctions require real-time synchronization, secure authentication, and strict role management to prevent fraud and ensure fair bidding.",
        solution: "Built a full-stack, real-time auction platform with WebSocket-powered live bidding, JWT-based authentication supporting Admin, Seller, and Bidder roles, seller approval workflows, and automatic auction expiry using scheduled background jobs.",
        impact: "Demonstrates production-grade architecture: real-time systems with Socket.IO, secure role-based authorization, centralized error handling, and scalable REST APIs.",
        features: &[
            "Live bidding with instant updates using Socket.IO",
            "JWT-based authentication with Admin, Seller, and Bidder roles",
            "Seller approval workflow controlled by Admin",
            "Automatic auction expiry using scheduled background jobs",
            "Admin dashboard with live activity monitoring",
            "Centralized error handling and secure REST APIs",
        ],
        github: "https://github.com/Prashant730/BidMaster",
        demo: "https://project1-steel-ten.vercel.app/",
    },
    ProjectEntry {
        id: "birdnet",
        title: "BirdNet",
        featured: false,
        short_desc: "Production website for a real business with responsive design and SEO optimization.",
        tech: &["React", "Vite", "Tailwind CSS"],
        problem: "A bird-netting services company needed a professional online presence to attract customers and showcase their services.",
        solution: "Delivered a production-ready business website with fully responsive layout, SEO-friendly structure, optimized assets for fast load times, and clean maintainable component architecture.",
        impact: "Actively used by real users on a live domain. Demonstrates ability to deliver and deploy real products for real clients, not just academic demos.",
        features: &[
            "Fully responsive layout (mobile, tablet, desktop)",
            "SEO-friendly structure",
            "Fast load times and optimized assets",
            "Clean, maintainable component structure",
        ],
        github: "https://github.com/Prashant730/BirdNet",
        demo: "https://npbirdnet.com",
    },
    ProjectEntry {
        id: "career-guidance",
        title: "Career Guidance Platform",
        featured: false,
        short_desc: "Skill-based career recommendation system with role-based dashboards.",
        tech: &["PHP", "MySQL", "HTML", "CSS", "JavaScript"],
        problem: "Students often struggle to identify suitable career paths based on their skills and interests without proper guidance.",
        solution: "Developed a backend-focused platform that generates career recommendations using structured input logic, with separate dashboards for students and admins, secure authentication, and admin-managed content.",
        impact: "Demonstrates backend logic, database design, role separation, and problem-oriented system design.",
        features: &[
            "Skill-based career recommendations",
            "Student and admin dashboards",
            "Secure authentication and session handling",
            "Admin-managed content",
        ],
        github: "https://github.com/Prashant730/Career-Guidance-Platform",
        demo: "https://careercompass1.rf.gd/?i=2",
    },
    ProjectEntry {
        id: "learning-tutor",
        title: "Learning Tutor",
        featured: false,
        short_desc: "Frontend learning platform for tutor-student interaction.",
        tech: &["JavaScript", "HTML", "CSS"],
        problem: "Need for a clean, role-oriented interface to facilitate tutor-student interactions in an educational context.",
        solution: "Built a frontend-focused application practicing component-based architecture and role-oriented UI design using React with modular, reusable components.",
        impact: "Supports frontend development skills with clean UI patterns and component architecture.",
        features: &[
            "Tutor and student role interfaces",
            "Modular React components",
            "Clean and intuitive UI",
        ],
        github: "https://github.com/Prashant730/learning-tutor",
        demo: "https://prashant730.github.io/learning-tutor/",
    },
];

pub const SOFT_SKILLS: &[SoftSkill] = &[
    SoftSkill {
        title: "Problem Decomposition",
        description: "Breaking complex features into manageable, testable components.",
    },
    SoftSkill {
        title: "Clear Technical Communication",
        description: "Documenting code and explaining technical decisions to teammates.",
    },
    SoftSkill {
        title: "Ownership Mindset",
        description: "Taking features from idea to deployment with accountability.",
    },
    SoftSkill {
        title: "Debugging-Oriented Thinking",
        description: "Systematic approach to identifying and resolving issues.",
    },
];

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        title: "B.Tech in Computer Science",
        institution: "Lovely Professional University (2023 - 2027)",
        detail: "CGPA: 6.76",
    },
    EducationEntry {
        title: "Class 12th (Intermediate)",
        institution: "Dr. D Ram D.A.V Public School, March 2022",
        detail: "Percentage: 78%",
    },
    EducationEntry {
        title: "Class 10th (Matriculation)",
        institution: "Dr. D Ram D.A.V Public School, March 2020",
        detail: "Percentage: 86.40%",
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Cloud Computing",
        issuer: "NPTEL, IIT Kharagpur",
        period: "Jan 2025 – Apr 2025 • 12-week certified course",
        document: "/Cloud Computing.pdf",
    },
    Certification {
        title: "C++ Programming (OOPs & DSA)",
        issuer: "CSE Pathshala",
        period: "Jun 2025 – Jul 2025 • 35+ hours summer training",
        document: "/cpp.pdf",
    },
    Certification {
        title: "Mind Sprint 48-Hour International Hackathon",
        issuer: "Unstop, Participant",
        period: "2025",
        document: "/hackathon.pdf",
    },
];

pub const ACHIEVEMENTS: &[AchievementEntry] = &[
    AchievementEntry {
        icon: "🚀",
        title: "Shipped a production website",
        description: "Designed and deployed BirdNet, a live business site used by real customers.",
    },
    AchievementEntry {
        icon: "⚡",
        title: "Built a real-time auction platform",
        description: "BidMaster handles live bidding for three user roles over WebSockets.",
    },
    AchievementEntry {
        icon: "🏆",
        title: "International hackathon participant",
        description: "Completed the Mind Sprint 48-hour international hackathon on Unstop.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn skill_percentages_are_bounded() {
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(skill.percent <= 100, "{} exceeds 100%", skill.name);
            }
        }
    }

    #[test]
    fn skill_key_renders_category_and_index() {
        let key = SKILL_CATEGORIES[1].key_for(2);
        assert_eq!(key.to_string(), "frontend-2");
    }

    #[test]
    fn empty_demo_means_no_live_site() {
        let mut project = PROJECTS[0].clone();
        assert!(project.has_demo());
        project.demo = "  ";
        assert!(!project.has_demo());
    }
}
