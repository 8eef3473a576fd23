//! The fixed internship catalog, the hardcoded recommendation table and the
//! default profile. Everything here is built once and never mutated.

use crate::types::{InternshipPosting, Recommendation, UserProfile};
use std::sync::OnceLock;

static POSTINGS: OnceLock<Vec<InternshipPosting>> = OnceLock::new();

#[allow(clippy::too_many_arguments)]
fn posting(
    id: u32,
    title: &str,
    company: &str,
    location: &str,
    duration: &str,
    stipend: &str,
    description: &str,
    skills: &[&str],
) -> InternshipPosting {
    InternshipPosting {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        duration: duration.to_string(),
        stipend: stipend.to_string(),
        description: description.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn postings() -> &'static [InternshipPosting] {
    POSTINGS.get_or_init(|| {
        vec![
            posting(
                1,
                "Frontend Developer Intern",
                "TechCorp Inc.",
                "Remote",
                "3 months",
                "$800/month",
                "Work on React-based projects...",
                &["React", "JavaScript", "CSS", "HTML"],
            ),
            posting(
                2,
                "Data Science Intern",
                "DataMinds AI",
                "Bangalore, India",
                "6 months",
                "₹15,000/month",
                "Assist in building ML models...",
                &["Python", "Machine Learning", "Pandas", "TensorFlow"],
            ),
            posting(
                3,
                "Backend Developer Intern",
                "CloudSoft Solutions",
                "Hybrid",
                "4 months",
                "$1000/month",
                "Develop REST APIs...",
                &["Node.js", "Express", "MongoDB", "AWS"],
            ),
            posting(
                4,
                "Mobile App Developer Intern",
                "AppVentures",
                "Mumbai, India",
                "3 months",
                "₹12,000/month",
                "Build cross-platform mobile apps...",
                &["React Native", "JavaScript", "Mobile Development", "Firebase"],
            ),
            posting(
                5,
                "UI/UX Design Intern",
                "DesignHub",
                "Remote",
                "3 months",
                "$700/month",
                "Create user interfaces...",
                &["Figma", "Adobe XD", "User Research", "Prototyping"],
            ),
        ]
    })
}

pub fn find(id: u32) -> Option<&'static InternshipPosting> {
    postings().iter().find(|p| p.id == id)
}

/// Case-insensitive substring match on title, company or any skill.
/// A blank query matches every posting.
pub fn search(query: &str) -> Vec<&'static InternshipPosting> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return postings().iter().collect();
    }

    postings()
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.company.to_lowercase().contains(&needle)
                || p.skills.iter().any(|s| s.to_lowercase().contains(&needle))
        })
        .collect()
}

// (posting id, score, reason, application url), in display order
const MOCK_MATCHES: [(u32, u8, &str, &str); 5] = [
    (
        1,
        92,
        "Your strong React and JavaScript skills align perfectly with this role. Your previous project experience demonstrates the exact technical stack required.",
        "https://example.com/apply/1",
    ),
    (
        3,
        87,
        "Your backend development experience with Node.js and database management makes you an excellent fit. Your cloud computing coursework is highly relevant.",
        "https://example.com/apply/2",
    ),
    (
        4,
        84,
        "Your JavaScript proficiency and interest in mobile development match well. Your understanding of modern frameworks is a strong advantage.",
        "https://example.com/apply/3",
    ),
    (
        2,
        78,
        "Your Python programming skills and coursework in statistics provide a good foundation. Consider strengthening ML knowledge for better fit.",
        "https://example.com/apply/4",
    ),
    (
        5,
        72,
        "Your creative portfolio and attention to detail in previous projects show potential. Your basic design tool knowledge is a good starting point.",
        "https://example.com/apply/5",
    ),
];

pub fn mock_recommendations() -> Vec<Recommendation> {
    MOCK_MATCHES
        .iter()
        .filter_map(|(id, score, reason, url)| {
            find(*id).map(|posting| Recommendation {
                posting: posting.clone(),
                match_score: *score,
                reason: reason.to_string(),
                application_url: url.to_string(),
            })
        })
        .collect()
}

pub fn default_profile() -> UserProfile {
    UserProfile {
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "+91 98765 43210".to_string(),
        location: "Narasaraopet, Andhra Pradesh".to_string(),
        education: "B.Tech Computer Science".to_string(),
        university: "Example University".to_string(),
        graduation_year: "2024".to_string(),
        skills: [
            "React",
            "JavaScript",
            "Python",
            "Node.js",
            "MongoDB",
            "UI/UX Design",
            "Cloud Computing",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_postings() {
        let ids: Vec<u32> = postings().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn mock_recommendations_are_fixed_and_descending() {
        let recs = mock_recommendations();
        assert_eq!(recs.len(), 5);

        let scores: Vec<u8> = recs.iter().map(|r| r.match_score).collect();
        assert_eq!(scores, vec![92, 87, 84, 78, 72]);

        let ids: Vec<u32> = recs.iter().map(|r| r.posting.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 2, 5]);
        assert_eq!(recs[1].application_url, "https://example.com/apply/2");
    }

    #[test]
    fn search_matches_title_company_and_skills() {
        assert_eq!(search("").len(), 5);
        assert_eq!(search("   ").len(), 5);

        let by_title: Vec<u32> = search("backend").iter().map(|p| p.id).collect();
        assert_eq!(by_title, vec![3]);

        let by_company: Vec<u32> = search("designhub").iter().map(|p| p.id).collect();
        assert_eq!(by_company, vec![5]);

        let by_skill: Vec<u32> = search("javascript").iter().map(|p| p.id).collect();
        assert_eq!(by_skill, vec![1, 4]);

        assert!(search("cobol").is_empty());
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find(2).map(|p| p.company.as_str()), Some("DataMinds AI"));
        assert!(find(42).is_none());
    }
}
