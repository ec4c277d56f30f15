//! End-to-end lead qualification with in-memory probes and a fixed authority.

mod helpers;

use std::sync::Arc;

use helpers::{FakeProbes, FixedAuthority};
use lead_assess::heuristics::{CompanySize, Industry};
use lead_assess::scoring::QualificationLevel;
use lead_assess::{Assessor, InputError, LeadRequest};

fn assessor_with_authority(authority: u8) -> Assessor {
    Assessor::new(Arc::new(FakeProbes::default()))
        .with_authority_estimator(Box::new(FixedAuthority(authority)))
}

#[tokio::test]
async fn test_free_mail_lead_scores_high() {
    let request = LeadRequest::from_json(
        r#"{"email":"user@gmail.com","phone":"5511999999999","name":"Ana Silva","domain":"acme.com"}"#,
    )
    .unwrap();
    let report = assessor_with_authority(60).qualify_lead(&request).await;

    assert!(report.email_quality.is_valid);
    assert!(report.email_quality.has_mx_records);
    assert!(report.email_quality.is_free_email);
    assert!(!report.email_quality.is_catch_all);
    assert!(!report.email_quality.is_disposable);
    assert_eq!(report.score.company_size, CompanySize::Small);
    assert_eq!(report.score.domain_authority, 60);
    // 10 + 10 + 0 + 40 + 10 + 10 + 4
    assert_eq!(report.score.lead_score, 84);
    assert_eq!(report.score.qualification_level, QualificationLevel::High);
    assert_eq!(report.score.flags, vec!["Priority lead - immediate follow-up"]);
    assert!(report.error.is_none());
}

#[tokio::test]
async fn test_score_is_clamped() {
    let request = LeadRequest::from_json(
        r#"{"email":"ana@acme.com","phone":"+55 11 99999-9999","name":"Ana Maria Silva"}"#,
    )
    .unwrap();
    let report = assessor_with_authority(250).qualify_lead(&request).await;

    assert_eq!(report.score.domain_authority, 100);
    assert_eq!(report.score.company_size, CompanySize::Large);
    assert_eq!(report.score.lead_score, 100);
}

#[tokio::test]
async fn test_www_host_reaches_authority_estimator() {
    let request = LeadRequest::from_json(r#"{"domain":"www.acme.com"}"#).unwrap();
    let report = assessor_with_authority(60).qualify_lead(&request).await;

    assert_eq!(report.score.domain_authority, 60);
    assert!(report.error.is_none());
}

#[tokio::test]
async fn test_country_domain_from_email_is_classified() {
    let request = LeadRequest::from_json(r#"{"email":"ana@lojaacme.com.br"}"#).unwrap();
    let report = assessor_with_authority(30).qualify_lead(&request).await;

    assert!(report.email_quality.is_valid);
    assert_eq!(report.score.domain_authority, 30);
    assert_eq!(report.score.industry, Industry::Ecommerce);
}

#[tokio::test]
async fn test_invalid_email_continues_with_zero_email_points() {
    let probes = Arc::new(FakeProbes::default());
    let assessor = Assessor::new(probes.clone())
        .with_authority_estimator(Box::new(FixedAuthority(20)));
    let request = LeadRequest::from_json(r#"{"email":"not-an-email","name":"Ana"}"#).unwrap();
    let report = assessor.qualify_lead(&request).await;

    assert_eq!(report.email_quality, Default::default());
    assert_eq!(probes.call_count(), 0);
    // No usable domain: authority 0, partial name 5, small company 4
    assert_eq!(report.score.domain_authority, 0);
    assert_eq!(report.score.industry, Industry::Other);
    assert_eq!(report.score.lead_score, 9);
    assert_eq!(report.score.qualification_level, QualificationLevel::VeryLow);
}

#[tokio::test]
async fn test_industry_from_domain() {
    let request = LeadRequest::from_json(r#"{"domain":"cloudlabs.io"}"#).unwrap();
    let report = assessor_with_authority(10).qualify_lead(&request).await;
    assert_eq!(report.score.industry, Industry::Tech);
}

#[test]
fn test_unusable_input_is_rejected_before_assessment() {
    assert_eq!(LeadRequest::from_json(""), Err(InputError::EmptyRequest));
    assert_eq!(LeadRequest::from_json("{}"), Err(InputError::EmptyRequest));
    assert!(matches!(
        LeadRequest::from_json("{\"email\":"),
        Err(InputError::MalformedRequest(_))
    ));
}

#[tokio::test]
async fn test_report_json_shape() {
    let request = LeadRequest::from_json(r#"{"email":"ana@acme.com"}"#).unwrap();
    let report = assessor_with_authority(35).qualify_lead(&request).await;
    let json = serde_json::to_value(&report).unwrap();
    let obj = json.as_object().unwrap();

    for key in [
        "timestamp",
        "leadScore",
        "emailQuality",
        "domainAuthority",
        "companySize",
        "industry",
        "qualificationLevel",
        "flags",
    ] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert!(!obj.contains_key("error"));
    assert_eq!(obj["companySize"], "medium");
    assert_eq!(obj["emailQuality"]["isFreeEmail"], false);
}
