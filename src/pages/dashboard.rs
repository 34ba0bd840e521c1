//! Dashboard Page
//!
//! Goal overview backed by one remote fetch (demo fallback on failure) and
//! mock tasks with dependency gating.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::models::{Goal, GoalStatus, Task};
use crate::session::use_session;
use crate::tasks;

const AI_QUESTIONS: &[(&str, &str)] = &[
    ("team collaboration features", "Team collaboration features"),
    ("learning resources", "Find learning resources"),
    ("share progress", "Share progress with team"),
    ("daily routines", "Suggest study routines"),
];

const QUICK_ACTIONS: &[(&str, &str)] = &[
    ("📚", "Add Resource"),
    ("🔄", "Update Progress"),
    ("📊", "Generate Report"),
    ("👥", "Invite Team"),
];

/// Fallback shown when the goal fetch fails
fn demo_goals() -> Vec<Goal> {
    vec![Goal {
        id: 1,
        title: "Learn React Fundamentals".to_string(),
        description: "Master React components, hooks, and state management".to_string(),
        progress_percentage: 35,
        duration_days: 60,
        status: GoalStatus::Active,
        category: "Programming".to_string(),
        weekly_schedule: Vec::new(),
        resources: Vec::new(),
        milestones: Vec::new(),
    }]
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (goals, set_goals) = signal(Vec::<Goal>::new());
    let (task_list, set_task_list) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);

    // One goal fetch per mount; any failure silently falls back to demo data
    Effect::new(move |_| {
        let token = session.token().unwrap_or_default();
        spawn_local(async move {
            match api::fetch_goals(&token).await {
                Ok(remote) => {
                    set_goals.set(remote.into_iter().map(Goal::from).collect());
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[Dashboard] Error fetching goals: {}", err).into(),
                    );
                    set_goals.set(demo_goals());
                }
            }
            set_loading.set(false);
        });
    });

    // Tasks are mock data behind a fixed delay, independent of the network
    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(1_000).await;
            set_task_list.set(tasks::seed_tasks());
        });
    });

    let toggle_task = move |id: u32| {
        set_task_list.update(|list| {
            if let Err(blockers) = tasks::toggle(list, id) {
                let titles = tasks::prerequisite_titles(list, &blockers);
                alert(&format!("❌ {}", tasks::blocking_message(&titles)));
            }
        });
    };

    let ask_assistant = move |question: &'static str| {
        web_sys::console::log_1(&format!("[Dashboard] AI question: {}", question).into());
        alert(&format!("AI Assistant: I'll help you with \"{}\"", question));
    };

    let pending_count = move || task_list.get().iter().filter(|t| !t.completed).count();

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="loading">"Loading your AI learning dashboard..."</div> }
        >
            <div class="dashboard">
                <div class="page-header">
                    <h1>"🎯 Goal Pilot AI"</h1>
                    <p>"Your personalized learning journey powered by AI"</p>
                </div>

                <div class="dashboard-grid-enhanced">
                    <div class="welcome-card glass-card">
                        <div class="welcome-content">
                            <h2>"👋 Welcome back!"</h2>
                            <p>"Ready to continue your learning journey?"</p>
                            <div class="streak-counter">
                                <span class="streak-number">"5"</span>
                                <span class="streak-label">"day streak! 🔥"</span>
                            </div>
                        </div>
                    </div>

                    <div class="progress-overview glass-card">
                        <h3>"📊 Program Overview"</h3>
                        <div class="progress-stats-enhanced">
                            <div class="stat-card-enhanced">
                                <div class="stat-icon">"🎯"</div>
                                <div class="stat-info">
                                    <h4>"Active Goals"</h4>
                                    <p class="stat-number">{move || goals.get().len()}</p>
                                </div>
                            </div>
                            <div class="stat-card-enhanced">
                                <div class="stat-icon">"💻"</div>
                                <div class="stat-info">
                                    <h4>"Weekly Progress"</h4>
                                    <p class="stat-number">"89%"</p>
                                </div>
                            </div>
                            <div class="stat-card-enhanced">
                                <div class="stat-icon">"⏱️"</div>
                                <div class="stat-info">
                                    <h4>"Study Time"</h4>
                                    <p class="stat-number">"24h"</p>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="ai-assistant-card glass-card">
                        <h3>"🤖 AI Assistant"</h3>
                        <p>"Need help with your goals? Ask me anything!"</p>
                        <div class="ai-quick-questions">
                            {AI_QUESTIONS.iter().map(|(question, label)| view! {
                                <button
                                    class="ai-question-btn"
                                    on:click=move |_| ask_assistant(question)
                                >
                                    {*label}
                                </button>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="goals-section glass-card">
                        <div class="section-header">
                            <h3>"🎯 Your Learning Goals"</h3>
                            <button
                                class="btn-primary btn-sm"
                                on:click={
                                    let navigate = navigate.clone();
                                    move |_| navigate("/create-goal", Default::default())
                                }
                            >
                                "+ New Goal"
                            </button>
                        </div>
                        <div class="goals-grid">
                            <For
                                each=move || goals.get()
                                key=|goal| goal.id
                                children=move |goal| {
                                    view! {
                                        <div class="goal-card-enhanced">
                                            <div class="goal-header">
                                                <h4>{goal.title.clone()}</h4>
                                                <span class="goal-category">{goal.category.clone()}</span>
                                            </div>
                                            <p class="goal-description">{goal.description.clone()}</p>

                                            <div class="goal-progress-enhanced">
                                                <div class="progress-info">
                                                    <span>"Progress"</span>
                                                    <span>{goal.progress_percentage}"%"</span>
                                                </div>
                                                <div class="progress-bar-enhanced">
                                                    <div
                                                        class="progress-fill-enhanced"
                                                        style=format!("width: {}%", goal.progress_percentage)
                                                    ></div>
                                                </div>
                                            </div>

                                            <div class="goal-footer">
                                                <div class="goal-meta">
                                                    <span>"📅 " {goal.duration_days} " days"</span>
                                                    <span>"🟢 " {goal.status.as_str()}</span>
                                                </div>
                                                <button class="btn-outline btn-sm">"Continue Learning"</button>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </div>

                    <div class="tasks-section glass-card">
                        <div class="section-header">
                            <h3>"📅 Upcoming Tasks"</h3>
                            <span class="tasks-count">{move || pending_count()} " pending"</span>
                        </div>
                        <div class="tasks-list">
                            <For
                                each=move || task_list.get()
                                key=|task| (task.id, task.completed)
                                children=move |task| {
                                    let id = task.id;
                                    view! {
                                        <div class="task-item">
                                            <div class="task-checkbox">
                                                <input
                                                    type="checkbox"
                                                    checked=task.completed
                                                    on:change=move |_| toggle_task(id)
                                                />
                                            </div>
                                            <div class="task-content">
                                                <h4 class=if task.completed { "completed" } else { "" }>
                                                    {task.title.clone()}
                                                </h4>
                                                <p>"Due: " {task.due_date.clone()}</p>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                        <div class="form-actions">
                            <button class="btn-outline btn-sm">"View All Tasks"</button>
                        </div>
                    </div>

                    <div class="quick-actions-card glass-card">
                        <h3>"⚡ Quick Actions"</h3>
                        <div class="ai-quick-questions">
                            {QUICK_ACTIONS.iter().map(|(icon, label)| view! {
                                <button class="ai-question-btn">
                                    <span>{*icon}</span> " " {*label}
                                </button>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
