// tests/unit_seniority.rs
use skillscope_core::keywords::SeniorityKeywords;
use skillscope_core::seniority::{detect_seniority, Level};

#[test]
fn test_senior_architect_scenario() {
    let keywords = SeniorityKeywords::default();
    let description = "We expect 8 years of experience. You will mentor the team, \
                       own distributed systems and improve observability.";
    let result = detect_seniority("Senior Backend Architect", description, &keywords);

    assert_eq!(result.level, Level::Senior);
    assert!(result.is_senior);
    assert!(result.score >= 9.0, "score was {}", result.score);
}

#[test]
fn test_junior_scenario() {
    let keywords = SeniorityKeywords::default();
    let result = detect_seniority(
        "Junior Software Engineer",
        "Entry level position. You will learn from the team.",
        &keywords,
    );

    assert_eq!(result.level, Level::Junior);
    assert!(!result.is_senior);
}

#[test]
fn test_managerial_title_forces_managerial_level() {
    let keywords = SeniorityKeywords::default();
    let result = detect_seniority("Director of Engineering", "Short posting.", &keywords);

    assert_eq!(result.level, Level::Managerial);
    assert!(result.is_senior);
}

#[test]
fn test_mid_level_from_experience_alone() {
    let keywords = SeniorityKeywords::default();
    // Neutral title (2.5) + mid experience (2.5) = 5.0, right on the cutoff.
    let result = detect_seniority(
        "Software Developer",
        "3 years of backend work required.",
        &keywords,
    );

    assert_eq!(result.level, Level::Mid);
    assert!(!result.is_senior);
}

#[test]
fn test_empty_title_and_body_default_to_junior() {
    let keywords = SeniorityKeywords::default();
    let result = detect_seniority("", "", &keywords);

    // Empty title still earns the neutral 2.5 (no junior marker), which
    // stays below the Mid cutoff.
    assert_eq!(result.level, Level::Junior);
    assert_eq!(result.score, 2.5);
}

#[test]
fn test_scoring_is_deterministic() {
    let keywords = SeniorityKeywords::default();
    let title = "Lead Platform Engineer";
    let description = "5+ years, design and scale microservices, capacity planning.";

    let first = detect_seniority(title, description, &keywords);
    let second = detect_seniority(title, description, &keywords);
    assert_eq!(first.score, second.score);
    assert_eq!(first.level, second.level);
}
