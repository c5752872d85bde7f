//! スキル一覧コンポーネント
//!
//! グループ（初出順）ごとにまとめて表示する。

use leptos::prelude::*;
use portfolio_common::Skill;

fn group_skills(skills: &[Skill]) -> Vec<(String, Vec<Skill>)> {
    let mut groups: Vec<(String, Vec<Skill>)> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|(name, _)| *name == skill.group) {
            Some((_, members)) => members.push(skill.clone()),
            None => groups.push((skill.group.clone(), vec![skill.clone()])),
        }
    }
    groups
}

#[component]
pub fn Skills(skills: Vec<Skill>) -> impl IntoView {
    let groups = group_skills(&skills);
    let has_skills = !groups.is_empty();

    view! {
        <section class="skills">
            <h2>"Skills"</h2>
            <Show
                when=move || has_skills
                fallback=|| view! { <p class="empty-state">"スキルは準備中です"</p> }
            >
                {groups
                    .clone()
                    .into_iter()
                    .map(|(group, members)| {
                        view! {
                            <div class="skill-group">
                                <h3>{group}</h3>
                                <ul class="skill-list">
                                    {members
                                        .into_iter()
                                        .map(|skill| {
                                            view! {
                                                <li class="skill-item">
                                                    <span class=format!("icon icon-{}", skill.icon)></span>
                                                    {skill.name}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </Show>
        </section>
    }
}
