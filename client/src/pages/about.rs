//! Static company page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::card::Card;

struct Value {
    title: &'static str,
    description: &'static str,
}

struct TeamMember {
    name: &'static str,
    role: &'static str,
}

const VALUES: [Value; 4] = [
    Value {
        title: "Reliability",
        description: "We build dependable support systems that keep your business running without interruption.",
    },
    Value {
        title: "Excellence",
        description: "We hold every ticket, answer and release to the highest standard of quality.",
    },
    Value {
        title: "Customer-First",
        description: "Every feature starts with the people who raise tickets and the agents who resolve them.",
    },
    Value {
        title: "Innovation",
        description: "We keep improving how IT teams track, prioritize and close support requests.",
    },
];

const TEAM: [TeamMember; 4] = [
    TeamMember { name: "Sarah Johnson", role: "CEO & Founder" },
    TeamMember { name: "Michael Chen", role: "CTO" },
    TeamMember { name: "Aisha Patel", role: "Head of Product" },
    TeamMember { name: "David Rodriguez", role: "Lead Developer" },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about-page">
            <section class="about-page__hero">
                <h1>"About StackIT"</h1>
                <p>
                    "StackIT helps organizations run their IT help desk: employees raise tickets, "
                    "agents resolve them, and administrators keep accounts in order."
                </p>
            </section>

            <h2>"Our Values"</h2>
            <div class="about-page__grid">
                {VALUES
                    .iter()
                    .map(|value| {
                        view! {
                            <Card title=value.title>
                                <p>{value.description}</p>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>

            <h2>"Our Team"</h2>
            <div class="about-page__grid">
                {TEAM
                    .iter()
                    .map(|member| {
                        view! {
                            <div class="team-member">
                                <span class="avatar avatar--large">{initials(member.name)}</span>
                                <h3>{member.name}</h3>
                                <p>{member.role}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="about-page__cta">
                <h2>"Ready to get started?"</h2>
                <p>"Bring your support desk onto StackIT today."</p>
                <A href="/register" attr:class="btn btn--primary">"Get Started"</A>
            </section>
        </div>
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|word| word.chars().next()).collect()
}
