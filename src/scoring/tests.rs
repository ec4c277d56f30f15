//! Scoring engine tests.

use super::*;

fn valid_business_email() -> EmailQuality {
    EmailQuality {
        is_valid: true,
        has_mx_records: true,
        ..Default::default()
    }
}

#[test]
fn test_threshold_boundaries() {
    let cases = [
        (100, QualificationLevel::High),
        (80, QualificationLevel::High),
        (79, QualificationLevel::Medium),
        (60, QualificationLevel::Medium),
        (59, QualificationLevel::Low),
        (40, QualificationLevel::Low),
        (39, QualificationLevel::VeryLow),
        (0, QualificationLevel::VeryLow),
    ];
    for (score, expected) in cases {
        assert_eq!(QualificationLevel::from_score(score), expected, "score {score}");
    }
}

#[test]
fn test_free_mail_lead_scenario() {
    // gmail address with MX, authority 60, long phone, two-token name, small company
    let quality = EmailQuality {
        is_valid: true,
        has_mx_records: true,
        is_free_email: true,
        ..Default::default()
    };
    let outcome = ScoringEngine::new().score(&ScoringInput {
        email_quality: &quality,
        domain_authority: 60,
        phone: Some("5511999999999"),
        name: Some("Ana Silva"),
        company_size: CompanySize::Small,
    });
    assert_eq!(outcome.lead_score, 84);
    assert_eq!(outcome.qualification_level, QualificationLevel::High);
    assert_eq!(outcome.flags, vec!["Priority lead - immediate follow-up"]);
}

#[test]
fn test_score_is_clamped_to_100() {
    let quality = valid_business_email();
    let outcome = ScoringEngine::new().score(&ScoringInput {
        email_quality: &quality,
        domain_authority: 100,
        phone: Some("+55 11 99999-9999"),
        name: Some("Ana Maria Silva"),
        company_size: CompanySize::Large,
    });
    // 30 + 40 + 10 + 10 + 10 = 100
    assert_eq!(outcome.lead_score, 100);
    assert_eq!(outcome.qualification_level, QualificationLevel::High);
}

#[test]
fn test_invalid_email_earns_no_email_points() {
    let quality = EmailQuality::default();
    let outcome = ScoringEngine::new().score(&ScoringInput {
        email_quality: &quality,
        domain_authority: 0,
        phone: None,
        name: None,
        company_size: CompanySize::Unknown,
    });
    // partial name (5) only
    assert_eq!(outcome.lead_score, 5);
    assert_eq!(outcome.qualification_level, QualificationLevel::VeryLow);
    assert_eq!(
        outcome.flags,
        vec!["Low quality - consider automated nurture"]
    );
}

#[test]
fn test_phone_must_exceed_eight_characters() {
    let quality = valid_business_email();
    let engine = ScoringEngine::new();
    let base = |phone| {
        engine
            .score(&ScoringInput {
                email_quality: &quality,
                domain_authority: 0,
                phone,
                name: Some("Ana"),
                company_size: CompanySize::Small,
            })
            .lead_score
    };
    assert_eq!(base(Some("12345678")), 39);
    assert_eq!(base(Some("123456789")), 49);
    assert_eq!(base(None), 39);
}

#[test]
fn test_name_tokens() {
    let quality = valid_business_email();
    let engine = ScoringEngine::new();
    let score_for = |name| {
        engine
            .score(&ScoringInput {
                email_quality: &quality,
                domain_authority: 10,
                phone: None,
                name,
                company_size: CompanySize::Medium,
            })
            .lead_score
    };
    // 30 + 10 + name + 7
    assert_eq!(score_for(Some("Ana  Silva")), 57);
    assert_eq!(score_for(Some("Ana")), 52);
    assert_eq!(score_for(Some("   ")), 52);
}

#[test]
fn test_authority_contribution_is_capped() {
    let quality = EmailQuality::default();
    let engine = ScoringEngine::new();
    let score_for = |authority| {
        engine
            .score(&ScoringInput {
                email_quality: &quality,
                domain_authority: authority,
                phone: None,
                name: None,
                company_size: CompanySize::Unknown,
            })
            .lead_score
    };
    // authority + partial name (5)
    assert_eq!(score_for(39), 44);
    assert_eq!(score_for(40), 45);
    assert_eq!(score_for(90), 45);
}

#[test]
fn test_size_bonus_table() {
    assert_eq!(size_bonus(CompanySize::Large), 10);
    assert_eq!(size_bonus(CompanySize::Medium), 7);
    assert_eq!(size_bonus(CompanySize::Small), 4);
    assert_eq!(size_bonus(CompanySize::Unknown), 0);
}

#[test]
fn test_exactly_one_flag_per_evaluation() {
    let quality = valid_business_email();
    let engine = ScoringEngine::new();
    for authority in [0u8, 20, 40, 100] {
        let outcome = engine.score(&ScoringInput {
            email_quality: &quality,
            domain_authority: authority,
            phone: Some("5511999999999"),
            name: Some("Ana Silva"),
            company_size: CompanySize::Medium,
        });
        assert_eq!(outcome.flags.len(), 1);
        assert!(outcome.lead_score <= 100);
        assert_eq!(
            outcome.flags[0],
            outcome.qualification_level.flag().to_string()
        );
    }
}

#[test]
fn test_level_wire_names() {
    assert_eq!(QualificationLevel::VeryLow.to_string(), "very_low");
    assert_eq!(
        serde_json::to_value(QualificationLevel::VeryLow).unwrap(),
        "very_low"
    );
    assert_eq!(QualificationLevel::High.to_string(), "high");
}
