//! Goal Creation Wizard Page
//!
//! View layer over the wizard state machine. Transitions and validation live
//! in `wizard`; this component binds them to the form store and drives plan
//! generation and submission.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;

use crate::api;
use crate::models::{GeneratedPlan, NewGoal};
use crate::wizard::{
    self, DateIssue, WizardForm, WizardFormStoreFields, WizardStep, DESCRIPTION_MAX,
    DESCRIPTION_WARN, DIFFICULTIES, DURATION_PRESETS, EXISTING_GOAL_TITLES, LEARNING_STYLES,
    STUDY_SCHEDULES, TITLE_MAX, TITLE_WARN, WEEKLY_HOURS,
};

fn options(list: &'static [(&'static str, &'static str)]) -> impl IntoView {
    list.iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect_view()
}

#[component]
pub fn CreateGoal() -> impl IntoView {
    let navigate = use_navigate();
    let form = Store::new(WizardForm::new());
    let (step, set_step) = signal(WizardStep::Goal);
    let (ai_plan, set_ai_plan) = signal(Option::<GeneratedPlan>::None);
    let (generating, set_generating) = signal(false);
    let (generation_error, set_generation_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);
    let (submit_error, set_submit_error) = signal(Option::<String>::None);

    // The plan's resources and milestones replace whatever the form held;
    // a failure leaves the form untouched so the user can retry.
    let generate_plan = move || {
        set_generating.set(true);
        set_generation_error.set(None);
        spawn_local(async move {
            match api::generate_plan().await {
                Ok(plan) => {
                    form.resources().set(plan.resources.clone());
                    form.milestones().set(plan.milestones.clone());
                    set_ai_plan.set(Some(plan));
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[CreateGoal] Error generating AI plan: {}", err).into(),
                    );
                    set_generation_error
                        .set(Some("Plan generation failed. Please try again.".to_string()));
                }
            }
            set_generating.set(false);
        });
    };

    let next_step = move |_| {
        let current = step.get();
        let next = current.forward(&form.title().get(), &form.description().get());
        if next != current {
            set_step.set(next);
            if current == WizardStep::Goal {
                generate_plan();
            }
        }
    };

    let prev_step = move |_| set_step.update(|s| *s = s.back());

    let cancel = {
        let navigate = navigate.clone();
        move |_| navigate("/dashboard", Default::default())
    };

    // Submission keeps the form and the generated plan on failure, so the
    // wizard stays where it was for a retry.
    let submit = {
        let navigate = navigate.clone();
        move |_| {
            set_submitting.set(true);
            set_submit_error.set(None);
            let navigate = navigate.clone();
            spawn_local(async move {
                let new_goal = NewGoal {
                    title: form.title().get_untracked(),
                    description: form.description().get_untracked(),
                    duration_days: wizard::effective_duration_days(
                        &form.duration_days().get_untracked(),
                        &form.custom_days().get_untracked(),
                    ),
                    start_date: form.start_date().get_untracked(),
                    end_date: form.end_date().get_untracked(),
                    difficulty: form.difficulty().get_untracked(),
                    study_schedule: form.study_schedule().get_untracked(),
                    weekly_hours: form.weekly_hours().get_untracked(),
                    learning_style: form.learning_style().get_untracked(),
                    resources: form.resources().get_untracked(),
                    milestones: form.milestones().get_untracked(),
                };
                match api::create_goal(&new_goal).await {
                    Ok(()) => navigate("/dashboard", Default::default()),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("[CreateGoal] Error creating goal: {}", err).into(),
                        );
                        set_submit_error.set(Some(
                            "Creating the goal failed. Your plan is unchanged, please try again."
                                .to_string(),
                        ));
                    }
                }
                set_submitting.set(false);
            });
        }
    };

    let title_len = move || form.title().get().chars().count();
    let description_len = move || form.description().get().chars().count();
    let effective_days = move || {
        wizard::effective_duration_days(&form.duration_days().get(), &form.custom_days().get())
    };

    view! {
        <div class="create-goal-enhanced">
            <div class="page-header">
                <h1>"🚀 Create New Goal"</h1>
                <p>"Tell AI what you want to achieve and we'll build your learning path"</p>
            </div>

            <div class="form-container">
                <div class="form-card glass-card">
                    <div class="form-header">
                        <h3>{move || step.get().heading()}</h3>
                        <div class="form-steps">
                            {[WizardStep::Goal, WizardStep::Plan, WizardStep::Review]
                                .iter()
                                .map(|s| {
                                    let s = *s;
                                    view! {
                                        <span class=move || {
                                            if step.get() == s { "step active" } else { "step" }
                                        }>
                                            {format!("{}. {}", s.number(), s.label())}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="goal-form-enhanced">
                        // Step 1: Goal Details
                        <Show when=move || step.get() == WizardStep::Goal>
                            <div class="step-page">
                                <div class="step-header">
                                    <h2>"🎯 Define Your Goal"</h2>
                                    <p>"Tell us what you want to learn and achieve"</p>
                                </div>

                                <div class="form-group-enhanced">
                                    <label class="form-label-main">
                                        "What do you want to learn? *"
                                        <span class="char-counter">
                                            {move || format!("({}/{})", title_len(), TITLE_MAX)}
                                        </span>
                                    </label>
                                    <input
                                        type="text"
                                        placeholder="e.g., Master React.js, Learn Python for Data Science, Build a Mobile App..."
                                        prop:value=move || form.title().get()
                                        on:input=move |ev| form.title().set(event_target_value(&ev))
                                        maxlength=TITLE_MAX.to_string()
                                        class="form-input-large"
                                        required
                                    />
                                    {move || {
                                        wizard::chars_remaining(title_len(), TITLE_MAX, TITLE_WARN)
                                            .map(|remaining| view! {
                                                <div class="warning-message">
                                                    {format!("⚠️ {} characters remaining", remaining)}
                                                </div>
                                            })
                                    }}
                                </div>

                                // Advisory only: the duplicate check warns but never blocks
                                {move || {
                                    wizard::is_duplicate_title(&form.title().get(), EXISTING_GOAL_TITLES)
                                        .then(|| view! {
                                            <div class="error-message">
                                                "❌ You already have a goal with this title. Please choose a different one."
                                            </div>
                                        })
                                }}

                                <div class="form-group-enhanced">
                                    <label class="form-label-main">
                                        "Describe your goal *"
                                        <span class="char-counter">
                                            {move || format!("({}/{})", description_len(), DESCRIPTION_MAX)}
                                        </span>
                                    </label>
                                    <textarea
                                        placeholder="Tell us more about what you want to achieve, why it's important to you, and any specific areas you want to focus on..."
                                        rows="6"
                                        prop:value=move || form.description().get()
                                        on:input=move |ev| form.description().set(event_target_value(&ev))
                                        maxlength=DESCRIPTION_MAX.to_string()
                                        class="form-textarea"
                                    ></textarea>
                                    {move || {
                                        wizard::chars_remaining(
                                            description_len(),
                                            DESCRIPTION_MAX,
                                            DESCRIPTION_WARN,
                                        )
                                        .map(|remaining| view! {
                                            <div class="warning-message">
                                                {format!("⚠️ {} characters remaining", remaining)}
                                            </div>
                                        })
                                    }}
                                    <p class="input-hint">
                                        "The more details you provide, the better we can personalize your learning path"
                                    </p>
                                </div>

                                <div class="form-actions">
                                    <button type="button" class="btn-secondary" on:click=cancel.clone()>
                                        "Cancel"
                                    </button>
                                    <button
                                        type="button"
                                        class="btn-primary btn-large"
                                        on:click=next_step
                                        disabled=move || {
                                            !wizard::goal_step_complete(
                                                &form.title().get(),
                                                &form.description().get(),
                                            )
                                        }
                                    >
                                        "Continue to Planning →"
                                    </button>
                                </div>
                            </div>
                        </Show>

                        // Step 2: Timeline, schedule, and learning preferences
                        <Show when=move || step.get() == WizardStep::Plan>
                            <div class="step-page">
                                <div class="step-header">
                                    <h2>"📅 Create Your Plan"</h2>
                                    <p>"Set up your timeline and learning preferences"</p>
                                </div>

                                {move || {
                                    generation_error.get().map(|message| view! {
                                        <div class="error-message">
                                            {message}
                                            <button
                                                type="button"
                                                class="btn-outline btn-sm"
                                                on:click=move |_| generate_plan()
                                            >
                                                "Try again"
                                            </button>
                                        </div>
                                    })
                                }}

                                <Show
                                    when=move || !(generating.get() && ai_plan.get().is_none())
                                    fallback=|| view! {
                                        <div class="loading">
                                            "🤖 AI is generating your personalized learning plan..."
                                        </div>
                                    }
                                >
                                    <div class="form-section-enhanced glass-card">
                                        <div class="section-header-enhanced">
                                            <h3 class="section-title">"Timeline & Difficulty"</h3>
                                            <p>"Set how long you want to learn and the challenge level"</p>
                                        </div>
                                        <div class="timeline-schedule-grid">
                                            <div class="timeline-section">
                                                <h4>"📅 Timeline"</h4>
                                                <select
                                                    class="form-select"
                                                    prop:value=move || form.duration_days().get()
                                                    on:change=move |ev| {
                                                        form.duration_days().set(event_target_value(&ev))
                                                    }
                                                >
                                                    {options(DURATION_PRESETS)}
                                                </select>
                                                <Show when=move || form.duration_days().get() == "custom">
                                                    <div class="custom-input-wrapper">
                                                        <input
                                                            type="number"
                                                            min="1"
                                                            max="365"
                                                            placeholder="Enter number of days"
                                                            class="custom-days-input"
                                                            prop:value=move || form.custom_days().get()
                                                            on:input=move |ev| {
                                                                form.custom_days().set(event_target_value(&ev))
                                                            }
                                                        />
                                                        <span class="custom-days-label">"days"</span>
                                                    </div>
                                                </Show>
                                            </div>
                                            <div class="difficulty-section">
                                                <h4>"🎯 Difficulty Level"</h4>
                                                <select
                                                    class="form-select"
                                                    prop:value=move || form.difficulty().get()
                                                    on:change=move |ev| {
                                                        form.difficulty().set(event_target_value(&ev))
                                                    }
                                                >
                                                    {options(DIFFICULTIES)}
                                                </select>
                                            </div>
                                        </div>
                                    </div>

                                    <div class="form-section-enhanced glass-card">
                                        <div class="section-header-enhanced">
                                            <h3 class="section-title">"Schedule"</h3>
                                            <p>"Set your start and target dates"</p>
                                        </div>
                                        <div class="schedule-dates-grid">
                                            <div class="date-section">
                                                <label class="form-label">"Start Date"</label>
                                                <input
                                                    type="date"
                                                    class="date-input"
                                                    prop:value=move || form.start_date().get()
                                                    on:input=move |ev| {
                                                        form.start_date().set(event_target_value(&ev))
                                                    }
                                                />
                                            </div>
                                            <div class="date-validation">
                                                {move || {
                                                    wizard::check_dates(
                                                        &form.start_date().get(),
                                                        &form.end_date().get(),
                                                        &form.duration_days().get(),
                                                    )
                                                    .into_iter()
                                                    .map(|issue| match issue {
                                                        DateIssue::EndNotAfterStart => view! {
                                                            <div class="error-message">
                                                                "❌ End date must be after start date"
                                                            </div>
                                                        }
                                                        .into_any(),
                                                        DateIssue::DurationMismatch {
                                                            range_days,
                                                            selected_days,
                                                        } => view! {
                                                            <div class="warning-message">
                                                                {format!(
                                                                    "⚠️ Date range ({} days) doesn't match selected duration ({} days)",
                                                                    range_days, selected_days,
                                                                )}
                                                            </div>
                                                        }
                                                        .into_any(),
                                                    })
                                                    .collect_view()
                                                }}
                                            </div>
                                            <div class="date-section">
                                                <label class="form-label">"Target Date"</label>
                                                <input
                                                    type="date"
                                                    class="date-input"
                                                    prop:value=move || form.end_date().get()
                                                    on:input=move |ev| {
                                                        form.end_date().set(event_target_value(&ev))
                                                    }
                                                />
                                            </div>
                                        </div>
                                    </div>

                                    <div class="form-section-enhanced glass-card">
                                        <div class="section-header-enhanced">
                                            <h3 class="section-title">"Learning Preferences"</h3>
                                            <p>"Customize how you want to learn"</p>
                                        </div>
                                        <div class="preferences-grid">
                                            <div class="preference-group">
                                                <label class="form-label">"📚 Study Schedule"</label>
                                                <select
                                                    class="form-select"
                                                    prop:value=move || form.study_schedule().get()
                                                    on:change=move |ev| {
                                                        form.study_schedule().set(event_target_value(&ev))
                                                    }
                                                >
                                                    {options(STUDY_SCHEDULES)}
                                                </select>
                                            </div>
                                            <div class="preference-group">
                                                <label class="form-label">"⏰ Weekly Hours"</label>
                                                <select
                                                    class="form-select"
                                                    prop:value=move || form.weekly_hours().get()
                                                    on:change=move |ev| {
                                                        form.weekly_hours().set(event_target_value(&ev))
                                                    }
                                                >
                                                    {options(WEEKLY_HOURS)}
                                                </select>
                                            </div>
                                            <div class="preference-group full-width">
                                                <label class="form-label">"🎨 Learning Style"</label>
                                                <select
                                                    class="form-select"
                                                    prop:value=move || form.learning_style().get()
                                                    on:change=move |ev| {
                                                        form.learning_style().set(event_target_value(&ev))
                                                    }
                                                >
                                                    {options(LEARNING_STYLES)}
                                                </select>
                                            </div>
                                        </div>
                                    </div>

                                    <div class="form-actions">
                                        <button type="button" class="btn-secondary" on:click=prev_step>
                                            "← Back to Goal"
                                        </button>
                                        <button type="button" class="btn-primary btn-large" on:click=next_step>
                                            "Review Plan →"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        </Show>

                        // Step 3: Review & submit
                        <Show when=move || step.get() == WizardStep::Review>
                            <div class="step-page">
                                <div class="step-header">
                                    <h2>"📋 Review Your Plan"</h2>
                                    <p>"Check your AI-generated learning plan before creating"</p>
                                </div>
                                <div class="review-content">
                                    <div class="review-section glass-card">
                                        <h3 class="section-title">"🎯 Goal Summary"</h3>
                                        <div class="summary-grid">
                                            <div class="summary-item">
                                                <strong>"Goal Title:"</strong>
                                                <span>{move || form.title().get()}</span>
                                            </div>
                                            <div class="summary-item">
                                                <strong>"Description:"</strong>
                                                <span>{move || form.description().get()}</span>
                                            </div>
                                            <div class="summary-item">
                                                <strong>"Duration:"</strong>
                                                <span>{move || format!("{} days", effective_days())}</span>
                                            </div>
                                            <div class="summary-item">
                                                <strong>"Difficulty:"</strong>
                                                <span class=move || {
                                                    format!("difficulty-badge {}", form.difficulty().get())
                                                }>
                                                    {move || form.difficulty().get()}
                                                </span>
                                            </div>
                                        </div>
                                    </div>

                                    <div class="review-section glass-card">
                                        <h3 class="section-title">"📅 Timeline & Schedule"</h3>
                                        <div class="timeline-review-grid">
                                            <div class="timeline-review-item">
                                                <strong>"Start Date:"</strong>
                                                <span>{move || {
                                                    let date = form.start_date().get();
                                                    if date.is_empty() { "Not set".to_string() } else { date }
                                                }}</span>
                                            </div>
                                            <div class="timeline-review-item">
                                                <strong>"Target Date:"</strong>
                                                <span>{move || {
                                                    let date = form.end_date().get();
                                                    if date.is_empty() { "Not set".to_string() } else { date }
                                                }}</span>
                                            </div>
                                            <div class="timeline-review-item">
                                                <strong>"Study Schedule:"</strong>
                                                <span>{move || form.study_schedule().get()}</span>
                                            </div>
                                            <div class="timeline-review-item">
                                                <strong>"Weekly Hours:"</strong>
                                                <span>{move || format!("{} hours", form.weekly_hours().get())}</span>
                                            </div>
                                        </div>
                                    </div>

                                    {move || {
                                        ai_plan.get().map(|plan| view! {
                                            <div class="review-section glass-card">
                                                <h3 class="section-title">"🤖 AI-Generated Learning Plan"</h3>

                                                <div class="plan-section">
                                                    <h4>"📅 Weekly Schedule"</h4>
                                                    <div class="schedule-grid">
                                                        {plan.weekly_schedule.iter().map(|day| view! {
                                                            <div class="schedule-item">
                                                                <div class="schedule-day">{day.day.clone()}</div>
                                                                <div class="schedule-topics">{day.topics.join(", ")}</div>
                                                                <div class="schedule-duration">{day.duration.clone()}</div>
                                                            </div>
                                                        }).collect_view()}
                                                    </div>
                                                </div>

                                                <div class="plan-section">
                                                    <h4>"📚 Learning Resources"</h4>
                                                    <div class="resources-grid">
                                                        {plan.resources.iter().map(|resource| view! {
                                                            <div class="resource-item">
                                                                <span class="resource-type">{resource.resource_type.clone()}</span>
                                                                <span class="resource-title">{resource.title.clone()}</span>
                                                                <span class="resource-duration">{resource.duration.clone()}</span>
                                                                {(!resource.valid).then(|| view! {
                                                                    <span class="resource-invalid">"⚠️ link unavailable"</span>
                                                                })}
                                                            </div>
                                                        }).collect_view()}
                                                    </div>
                                                </div>

                                                <div class="plan-section">
                                                    <h4>"🎯 Progress Milestones"</h4>
                                                    <div class="milestones-grid">
                                                        {plan.milestones.iter().map(|milestone| view! {
                                                            <div class="milestone-item">
                                                                <div class="milestone-week">
                                                                    {format!("Week {}", milestone.week)}
                                                                </div>
                                                                <div class="milestone-goal">{milestone.goal.clone()}</div>
                                                                <div class="milestone-status">"Pending"</div>
                                                            </div>
                                                        }).collect_view()}
                                                    </div>
                                                </div>
                                            </div>
                                        })
                                    }}

                                    {move || {
                                        submit_error.get().map(|message| view! {
                                            <div class="error-message">{message}</div>
                                        })
                                    }}

                                    <div class="form-actions">
                                        <button type="button" class="btn-secondary" on:click=prev_step>
                                            "← Back to Planning"
                                        </button>
                                        <button
                                            type="button"
                                            class="btn-primary btn-large"
                                            disabled=move || submitting.get()
                                            on:click=submit.clone()
                                        >
                                            {move || {
                                                if submitting.get() {
                                                    "Creating Your Goal..."
                                                } else {
                                                    "🚀 Create Goal with AI"
                                                }
                                            }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </Show>
                    </div>
                </div>

                <div class="ai-preview-sidebar glass-card">
                    <h4>"🤖 AI Preview"</h4>
                    <p>"Based on your goal, AI will:"</p>
                    <ul class="ai-features-list">
                        <li>"📚 Curate learning resources"</li>
                        <li>"🗓️ Create study schedule"</li>
                        <li>"✅ Break down into tasks"</li>
                        <li>"📊 Track your progress"</li>
                        <li>"💡 Provide personalized tips"</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
