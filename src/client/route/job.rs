use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Markdown, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        store::user::UserState,
        util::{format_date, non_empty, parse_number, split_list},
    },
    model::{
        enums::{JobType, LocationType},
        job::{CreateJobDto, JobDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::job::{create_job, get_job, get_jobs};

fn salary_range(job: &JobDto) -> Option<String> {
    match (job.salary_min, job.salary_max) {
        (Some(min), Some(max)) => Some(format!("{} {} - {}", job.salary_currency, min, max)),
        (Some(min), None) => Some(format!("{} {}+", job.salary_currency, min)),
        (None, Some(max)) => Some(format!("up to {} {}", job.salary_currency, max)),
        (None, None) => None,
    }
}

#[component]
pub fn Jobs() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let mut job_type = use_signal(String::new);
    let mut location_type = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut query = use_signal(String::new);
    let mut jobs = use_signal(|| None::<Vec<JobDto>>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        get_jobs(job_type(), location_type(), city(), query()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    jobs.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch jobs: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let logged_in = user_state.read().user.is_some();

    rsx! {
        Title { "Jobs | {SITE_NAME}" }
        Page {
            div {
                class: "row spread",
                h1 { "Jobs" }
                if logged_in {
                    Link { to: Route::NewJob {}, class: "btn btn-primary", "Post a job" }
                }
            }
            div {
                class: "filters",
                select {
                    value: "{job_type}",
                    onchange: move |e| job_type.set(e.value()),
                    option { value: "", "All job types" }
                    for t in JobType::ALL {
                        option { value: "{t}", "{t}" }
                    }
                }
                select {
                    value: "{location_type}",
                    onchange: move |e| location_type.set(e.value()),
                    option { value: "", "Any location" }
                    for l in LocationType::ALL {
                        option { value: "{l}", "{l}" }
                    }
                }
                input {
                    placeholder: "City",
                    value: "{city}",
                    oninput: move |e| city.set(e.value()),
                }
                input {
                    placeholder: "Search title or description",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
            }
            if let Some(err) = error() {
                p { class: "error", "{err}" }
            } else if let Some(list) = jobs() {
                if list.is_empty() {
                    p { class: "muted", "No open roles match these filters" }
                }
                div {
                    class: "list",
                    for job in list {
                        Link {
                            key: "{job.id}",
                            to: Route::JobDetail { id: job.id },
                            class: if job.is_featured { "card card-featured" } else { "card" },
                            h3 { "{job.title}" }
                            p { class: "muted", "{job.startup_name}" }
                            div {
                                class: "row",
                                span { class: "badge", "{job.job_type}" }
                                span { class: "badge", "{job.location_type}" }
                                if let Some(city) = &job.city {
                                    span { "{city}" }
                                }
                                if let Some(salary) = salary_range(&job) {
                                    span { "{salary}" }
                                }
                            }
                        }
                    }
                }
            } else {
                span { class: "spinner" }
            }
        }
    }
}

#[component]
pub fn JobDetail(id: i32) -> Element {
    let mut job = use_signal(|| None::<JobDto>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(use_reactive!(|id| async move { get_job(id).await }));

        use_effect(move || {
            match &*future.read_unchecked() {
                Some(Ok(found)) => job.set(Some(found.clone())),
                Some(Err(err)) => error.set(Some(err.clone())),
                None => (),
            }
        });
    }

    rsx! {
        if let Some(j) = job() {
            Title { "{j.title} | {SITE_NAME}" }
            Page {
                div {
                    class: "row",
                    if let Some(logo) = &j.startup_logo_url {
                        img { class: "avatar", src: "{logo}" }
                    }
                    div {
                        h1 { "{j.title}" }
                        p { class: "muted", "{j.startup_name}" }
                    }
                }
                div {
                    class: "row",
                    span { class: "badge", "{j.job_type}" }
                    span { class: "badge", "{j.location_type}" }
                    if let Some(city) = &j.city {
                        span { "{city}" }
                    }
                    if let Some(salary) = salary_range(&j) {
                        span { "{salary}" }
                    }
                    span { class: "muted", "Posted {format_date(&j.created_at)}" }
                }
                Markdown { content: j.description.clone() }
                if let Some(requirements) = &j.requirements {
                    h2 { "Requirements" }
                    Markdown { content: requirements.clone() }
                }
                if !j.skills.is_empty() {
                    div {
                        class: "row",
                        for skill in j.skills.iter() {
                            span { class: "badge", "{skill}" }
                        }
                    }
                }
                if let Some(url) = &j.apply_url {
                    a { href: "{url}", target: "_blank", class: "btn btn-primary", "Apply" }
                } else if let Some(email) = &j.apply_email {
                    a { href: "mailto:{email}", class: "btn btn-primary", "Apply by email" }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
pub fn NewJob() -> Element {
    let nav = navigator();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut requirements = use_signal(String::new);
    let mut job_type = use_signal(JobType::default);
    let mut location_type = use_signal(LocationType::default);
    let mut city = use_signal(String::new);
    let mut salary_min = use_signal(String::new);
    let mut salary_max = use_signal(String::new);
    let mut apply_url = use_signal(String::new);
    let mut apply_email = use_signal(String::new);
    let mut skills = use_signal(String::new);
    let mut error = use_signal(|| None::<ApiError>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = CreateJobDto {
            title: title(),
            description: description(),
            requirements: non_empty(requirements()),
            salary_min: parse_number(&salary_min()),
            salary_max: parse_number(&salary_max()),
            salary_currency: None,
            job_type: Some(job_type()),
            location_type: Some(location_type()),
            city: non_empty(city()),
            apply_url: non_empty(apply_url()),
            apply_email: non_empty(apply_email()),
            skills: split_list(&skills()),
        };
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match create_job(payload).await {
                Ok(job) => {
                    nav.push(Route::JobDetail { id: job.id });
                }
                Err(err) => {
                    tracing::error!("Failed to post job: {}", err);
                    error.set(Some(err));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        Title { "Post a job | {SITE_NAME}" }
        Page {
            h1 { "Post a job" }
            p { class: "muted", "Jobs are listed under your startup. Add your startup first if you haven't." }
            form {
                class: "form",
                onsubmit: on_submit,
                label { "Title" }
                input { value: "{title}", oninput: move |e| title.set(e.value()) }
                label { "Description (markdown)" }
                textarea { rows: 8, value: "{description}", oninput: move |e| description.set(e.value()) }
                label { "Requirements (markdown)" }
                textarea { rows: 4, value: "{requirements}", oninput: move |e| requirements.set(e.value()) }
                label { "Job type" }
                select {
                    value: "{job_type}",
                    onchange: move |e| {
                        if let Some(parsed) = JobType::parse(&e.value()) {
                            job_type.set(parsed);
                        }
                    },
                    for t in JobType::ALL {
                        option { value: "{t}", "{t}" }
                    }
                }
                label { "Location" }
                select {
                    value: "{location_type}",
                    onchange: move |e| {
                        if let Some(parsed) = LocationType::parse(&e.value()) {
                            location_type.set(parsed);
                        }
                    },
                    for l in LocationType::ALL {
                        option { value: "{l}", "{l}" }
                    }
                }
                label { "City" }
                input { value: "{city}", oninput: move |e| city.set(e.value()) }
                label { "Salary range (INR)" }
                div {
                    class: "row",
                    input { r#type: "number", placeholder: "Min", value: "{salary_min}", oninput: move |e| salary_min.set(e.value()) }
                    input { r#type: "number", placeholder: "Max", value: "{salary_max}", oninput: move |e| salary_max.set(e.value()) }
                }
                label { "Apply URL" }
                input { value: "{apply_url}", oninput: move |e| apply_url.set(e.value()) }
                label { "Apply email" }
                input { r#type: "email", value: "{apply_email}", oninput: move |e| apply_email.set(e.value()) }
                label { "Skills (comma separated)" }
                input { value: "{skills}", oninput: move |e| skills.set(e.value()) }
                if let Some(err) = error() {
                    p { class: "error", "{err}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    "Post job"
                }
            }
        }
    }
}
