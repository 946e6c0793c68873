// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic demo datasets served when no hosted backend is
//! configured. Timestamps are fixed so listings, exports, and tests are
//! reproducible across restarts.

use chrono::{DateTime, TimeZone, Utc};
use lumeo_core::types::{
    BlogCategory, BlogPost, BudgetRange, Lead, LeadId, LeadStatus, PostId, ServiceOffering, Slug,
};

fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("demo timestamps are valid calendar dates")
}

/// The demo lead dataset shown in the admin dashboard in fallback mode.
pub fn demo_leads() -> Vec<Lead> {
    vec![
        Lead {
            id: LeadId("lead-demo-001".into()),
            name: "Sarah Mitchell".into(),
            email: "sarah.mitchell@northwindretail.com".into(),
            company: Some("Northwind Retail".into()),
            phone: Some("+1 (555) 023-4410".into()),
            service: ServiceOffering::WebDevelopment,
            budget: Some(BudgetRange::Range25kTo50k),
            message: "We're replatforming our storefront and need a partner for the rebuild."
                .into(),
            status: LeadStatus::Qualified,
            source: "Contact Form".into(),
            created_at: ts(2026, 2, 18, 14, 32),
            updated_at: ts(2026, 2, 20, 9, 5),
        },
        Lead {
            id: LeadId("lead-demo-002".into()),
            name: "Daniel Okafor".into(),
            email: "d.okafor@heliosenergy.io".into(),
            company: Some("Helios Energy".into()),
            phone: None,
            service: ServiceOffering::CloudSolutions,
            budget: Some(BudgetRange::Range50kTo100k),
            message: "Looking for a migration assessment of our on-prem workloads to the cloud."
                .into(),
            status: LeadStatus::Contacted,
            source: "Contact Form".into(),
            created_at: ts(2026, 2, 15, 10, 12),
            updated_at: ts(2026, 2, 16, 16, 40),
        },
        Lead {
            id: LeadId("lead-demo-003".into()),
            name: "Mina Park".into(),
            email: "mina@parkandcole.design".into(),
            company: Some("Park & Cole".into()),
            phone: Some("+1 (555) 098-1174".into()),
            service: ServiceOffering::DigitalMarketing,
            budget: Some(BudgetRange::Under10k),
            message: "Small studio, want help setting up analytics and a paid-search pilot.".into(),
            status: LeadStatus::New,
            source: "Contact Form".into(),
            created_at: ts(2026, 2, 21, 8, 47),
            updated_at: ts(2026, 2, 21, 8, 47),
        },
        Lead {
            id: LeadId("lead-demo-004".into()),
            name: "Tomás Herrera".into(),
            email: "tomas.herrera@andesfreight.com".into(),
            company: Some("Andes Freight".into()),
            phone: None,
            service: ServiceOffering::DataAnalytics,
            budget: Some(BudgetRange::Range10kTo25k),
            message: "We want a dispatch dashboard pulling from three legacy systems.".into(),
            status: LeadStatus::Proposal,
            source: "Referral".into(),
            created_at: ts(2026, 1, 29, 11, 3),
            updated_at: ts(2026, 2, 10, 13, 22),
        },
        Lead {
            id: LeadId("lead-demo-005".into()),
            name: "Priya Raman".into(),
            email: "praman@clearpathhealth.org".into(),
            company: None,
            phone: Some("+1 (555) 044-2096".into()),
            service: ServiceOffering::MobileDevelopment,
            budget: None,
            message: "Exploring a patient check-in app; early stage, budget not yet set.".into(),
            status: LeadStatus::New,
            source: "Contact Form".into(),
            created_at: ts(2026, 2, 22, 17, 58),
            updated_at: ts(2026, 2, 22, 17, 58),
        },
        Lead {
            id: LeadId("lead-demo-006".into()),
            name: "Geoff Lindqvist".into(),
            email: "geoff@lindqvistlaw.se".into(),
            company: Some("Lindqvist Law".into()),
            phone: None,
            service: ServiceOffering::ItConsulting,
            budget: Some(BudgetRange::Under10k),
            message: "Need an audit of our current vendor setup before renewing contracts.".into(),
            status: LeadStatus::Closed,
            source: "Contact Form".into(),
            created_at: ts(2025, 12, 4, 9, 15),
            updated_at: ts(2026, 1, 8, 10, 30),
        },
    ]
}

/// The demo blog dataset: four published posts and one draft.
pub fn demo_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: PostId("post-demo-001".into()),
            slug: Slug("choosing-a-cloud-migration-strategy".into()),
            title: "Choosing a Cloud Migration Strategy That Won't Stall".into(),
            excerpt: "Lift-and-shift, replatform, or rebuild: how to pick a migration path your team can actually finish.".into(),
            content: "# The three paths\nEvery migration conversation starts with the same three options.\n\n## Lift and shift\nFast, **predictable**, and almost always more expensive to run than people expect.\n\n## Replatform\nThe middle road: swap the database and the runtime, keep the architecture.\n\n## Rebuild\nOnly worth it when the business logic itself is the liability.".into(),
            author: "Elena Vasquez".into(),
            category: BlogCategory::CloudComputing,
            tags: vec!["cloud".into(), "migration".into(), "strategy".into()],
            reading_time_minutes: 6,
            published: true,
            published_at: Some(ts(2026, 2, 11, 9, 0)),
            views: 1843,
            seo_title: Some("Cloud Migration Strategy Guide".into()),
            seo_description: None,
            ai_generated: false,
            trending_score: 92,
            created_at: ts(2026, 2, 9, 15, 20),
            updated_at: ts(2026, 2, 11, 9, 0),
        },
        BlogPost {
            id: PostId("post-demo-002".into()),
            slug: Slug("what-an-analytics-audit-actually-covers".into()),
            title: "What an Analytics Audit Actually Covers".into(),
            excerpt: "Before buying another dashboard, find out whether the numbers you already collect mean anything.".into(),
            content: "Most analytics audits find the same thing: **the data is fine, the definitions are not**.\n\n## Event inventory\nWhat gets tracked, by which system, under which name.\n\n## Definition drift\nThe quiet killer. Two teams, one metric name, two formulas.".into(),
            author: "Marcus Webb".into(),
            category: BlogCategory::DigitalStrategy,
            tags: vec!["analytics".into(), "audit".into()],
            reading_time_minutes: 4,
            published: true,
            published_at: Some(ts(2026, 1, 28, 8, 30)),
            views: 927,
            seo_title: None,
            seo_description: Some("What a professional analytics audit includes and why definition drift matters.".into()),
            ai_generated: false,
            trending_score: 61,
            created_at: ts(2026, 1, 26, 12, 0),
            updated_at: ts(2026, 1, 28, 8, 30),
        },
        BlogPost {
            id: PostId("post-demo-003".into()),
            slug: Slug("case-study-andes-freight-dispatch".into()),
            title: "Case Study: A Dispatch Dashboard for Andes Freight".into(),
            excerpt: "Three legacy systems, one screen: how we cut dispatch decision time by 40%.".into(),
            content: "# The problem\nDispatchers juggled three terminals and a printed spreadsheet.\n\n# The build\nA read-only aggregation layer first. **No writes until trust was earned.**\n\n# The result\nDecision time down 40% in the first month.".into(),
            author: "Elena Vasquez".into(),
            category: BlogCategory::CaseStudy,
            tags: vec!["case-study".into(), "logistics".into(), "dashboards".into()],
            reading_time_minutes: 7,
            published: true,
            published_at: Some(ts(2026, 2, 4, 10, 0)),
            views: 512,
            seo_title: None,
            seo_description: None,
            ai_generated: false,
            trending_score: 44,
            created_at: ts(2026, 2, 1, 9, 45),
            updated_at: ts(2026, 2, 4, 10, 0),
        },
        BlogPost {
            id: PostId("post-demo-004".into()),
            slug: Slug("llm-features-worth-shipping".into()),
            title: "LLM Features Worth Shipping (and the Ones That Aren't)".into(),
            excerpt: "A field guide to AI features that survive contact with real users.".into(),
            content: "## Worth shipping\nSummarization over your own data. Drafting with human review.\n\n## Not yet\nAnything where a **wrong answer costs more than the feature saves**.".into(),
            author: "Marcus Webb".into(),
            category: BlogCategory::ArtificialIntelligence,
            tags: vec!["ai".into(), "product".into()],
            reading_time_minutes: 5,
            published: true,
            published_at: Some(ts(2026, 2, 19, 7, 45)),
            views: 2105,
            seo_title: None,
            seo_description: None,
            ai_generated: true,
            trending_score: 88,
            created_at: ts(2026, 2, 18, 16, 10),
            updated_at: ts(2026, 2, 19, 7, 45),
        },
        BlogPost {
            id: PostId("post-demo-005".into()),
            slug: Slug("progressive-web-apps-in-2026".into()),
            title: "Progressive Web Apps in 2026: Still the Budget Option?".into(),
            excerpt: "Draft notes on where PWAs fit between a website and a native app.".into(),
            content: "Draft. ## Install friction\nStill the main objection.\n\n## Where they win\nInternal tools and **content-first** products.".into(),
            author: "Elena Vasquez".into(),
            category: BlogCategory::WebDevelopment,
            tags: vec!["pwa".into(), "mobile".into()],
            reading_time_minutes: 3,
            published: false,
            published_at: None,
            views: 0,
            seo_title: None,
            seo_description: None,
            ai_generated: false,
            trending_score: 0,
            created_at: ts(2026, 2, 20, 11, 30),
            updated_at: ts(2026, 2, 22, 14, 5),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_lead_ids_are_unique() {
        let leads = demo_leads();
        let mut ids: Vec<_> = leads.iter().map(|l| l.id.0.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), leads.len());
    }

    #[test]
    fn demo_slugs_are_unique() {
        let posts = demo_posts();
        let mut slugs: Vec<_> = posts.iter().map(|p| p.slug.0.clone()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), posts.len());
    }

    #[test]
    fn published_posts_carry_publish_timestamps() {
        for post in demo_posts() {
            if post.published {
                assert!(post.published_at.is_some(), "{} lacks published_at", post.slug);
            } else {
                assert!(post.published_at.is_none());
            }
        }
    }

    #[test]
    fn datasets_are_deterministic() {
        let a = demo_leads();
        let b = demo_leads();
        assert_eq!(
            a.iter().map(|l| &l.id.0).collect::<Vec<_>>(),
            b.iter().map(|l| &l.id.0).collect::<Vec<_>>()
        );
    }
}
