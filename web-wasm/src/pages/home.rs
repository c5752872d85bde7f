//! Homeページ
//!
//! ヒーロー・自己紹介・スキル・実績・お問い合わせを縦に並べる。

use leptos::prelude::*;

use crate::components::{
    about::About, achievements::Achievements, contact_form::ContactForm, hero::Hero,
    skills::Skills,
};
use crate::data;

#[component]
pub fn HomePage() -> impl IntoView {
    let skills = data::load_skills();
    let achievements = data::load_achievements();

    view! {
        <Hero />
        <About />
        <Skills skills=skills />
        <Achievements achievements=achievements />
        <ContactForm />
    }
}
