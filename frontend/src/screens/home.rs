use crate::app::redraw_hook;
use crate::theme::{button_style, field_style, spacing, AppColors};
use crate::widgets::{AlertDialog, GradientBackground, GradientCard};
use chrono::NaiveDate;
use dioxus::prelude::*;
use projtrack_client_core::format::format_money;
use projtrack_client_core::{
    ExpenseType, HomeController, Navigation, ProjectStatus, Services, SubmitOutcome,
    ALL_COMPANIES,
};

/// Placeholder option value for the project picker.
const NO_PROJECT: &str = "null";

#[component]
pub fn HomeScreen(is_dark: bool, on_require_login: EventHandler<()>) -> Element {
    let services = use_context::<Signal<Services>>();
    let revision = use_signal_sync(|| 0u64);
    let controller = use_hook(move || {
        let services = services.peek().clone();
        let today = chrono::Local::now().date_naive();
        HomeController::new(services.api, services.sessions, today, redraw_hook(revision))
    });

    use_hook({
        let controller = controller.clone();
        move || {
            spawn(async move {
                if controller.mount().await == Navigation::Login {
                    on_require_login.call(());
                }
            });
        }
    });
    use_drop({
        let controller = controller.clone();
        move || controller.unmount()
    });

    let _ = revision();
    let state = controller.snapshot();

    let on_surface = AppColors::on_surface(is_dark);
    let input_style = field_style(is_dark);
    let label_style = format!(
        "display: block; margin: {} 0 {}; color: {}; font-size: 0.875rem;",
        spacing::MD,
        spacing::XS,
        on_surface
    );
    let logout_style = button_style(AppColors::danger(is_dark), false);
    let submit_style = button_style(AppColors::primary(is_dark), state.submitting);
    let cancel_style = button_style(AppColors::OUTLINE, false);
    let link = AppColors::link(is_dark);
    let upload_url = services.peek().api.config().upload_folder_url.clone();

    let selected_project = state.selected_project().unwrap_or(NO_PROJECT).to_string();
    let expense_type_code = state
        .draft
        .expense_type
        .map(|t| t.code())
        .unwrap_or_default();
    let amount_preview = format_money(&state.draft.amount);
    let date_value = state.draft.expense_date.format("%Y-%m-%d").to_string();

    // Navigation results from async handlers.
    let follow = move |nav: Navigation| {
        if nav == Navigation::Login {
            on_require_login.call(());
        }
    };

    let c_company = controller.clone();
    let c_status = controller.clone();
    let c_project = controller.clone();
    let c_date = controller.clone();
    let c_type = controller.clone();
    let c_amount = controller.clone();
    let c_pdf = controller.clone();
    let c_submit = controller.clone();
    let c_cancel = controller.clone();
    let c_logout = controller.clone();
    let c_alert = controller.clone();

    rsx! {
        GradientBackground { is_dark,
            div { style: "max-width: 520px; margin: 0 auto;",
                div { style: "display: flex; align-items: center; margin-bottom: {spacing::MD};",
                    h1 { style: "flex: 1; font-size: 1.4rem; color: {on_surface}; margin: 0;", "Projects Report" }
                    button {
                        onclick: move |_| {
                            if c_logout.logout() == Navigation::Login {
                                on_require_login.call(());
                            }
                        },
                        style: "{logout_style}",
                        "Logout"
                    }
                }

                GradientCard { is_dark, title: "Projects".to_string(),
                    label { style: "{label_style}", "Company" }
                    select {
                        disabled: state.loading_companies,
                        style: "{input_style}",
                        onchange: move |ev| {
                            let controller = c_company.clone();
                            let company = ev.value();
                            spawn(async move { follow(controller.set_company_filter(company).await) });
                        },
                        option {
                            value: ALL_COMPANIES,
                            selected: state.company_filter == ALL_COMPANIES,
                            "All Companies"
                        }
                        for company in state.companies.iter() {
                            option {
                                key: "{company.company_id}",
                                value: "{company.company_name}",
                                selected: state.company_filter == company.company_name,
                                "{company.company_name}"
                            }
                        }
                    }

                    label { style: "{label_style}", "Project Status" }
                    select {
                        style: "{input_style}",
                        onchange: move |ev| {
                            let Ok(code) = ev.value().parse::<i64>() else {
                                return;
                            };
                            let controller = c_status.clone();
                            let status = ProjectStatus::from_code(code);
                            spawn(async move { follow(controller.set_status_filter(status).await) });
                        },
                        for status in ProjectStatus::ALL {
                            option {
                                key: "{status.code()}",
                                value: "{status.code()}",
                                selected: state.status_filter == status,
                                "{status.label()}"
                            }
                        }
                    }

                    label { style: "{label_style}",
                        if state.loading_projects { "Project (loading…)" } else { "Project" }
                    }
                    select {
                        style: "{input_style}",
                        onchange: move |ev| c_project.select_project(Some(ev.value())),
                        option { value: NO_PROJECT, selected: selected_project == NO_PROJECT, "Select a project" }
                        for project in state.projects.iter() {
                            option {
                                key: "{project.project_id}",
                                value: "{project.project_name}",
                                selected: selected_project == project.project_name,
                                "{project.project_name}"
                            }
                        }
                    }
                }

                if state.show_expense_form() {
                    GradientCard { is_dark, title: "New Expense".to_string(),
                        p { style: "color: {on_surface}; font-weight: 600; margin: 0;",
                            "Selected Project: {selected_project}"
                        }

                        label { style: "{label_style}", "Date" }
                        input {
                            r#type: "date",
                            value: "{date_value}",
                            style: "{input_style}",
                            oninput: move |ev| {
                                if let Ok(date) = NaiveDate::parse_from_str(&ev.value(), "%Y-%m-%d") {
                                    c_date.set_expense_date(date);
                                }
                            },
                        }

                        label { style: "{label_style}", "Expense Type" }
                        select {
                            style: "{input_style}",
                            onchange: move |ev| c_type.set_expense_type(ExpenseType::from_code(&ev.value())),
                            option { value: "", selected: expense_type_code.is_empty(), "Select expense type" }
                            for expense_type in ExpenseType::ALL {
                                option {
                                    key: "{expense_type.code()}",
                                    value: "{expense_type.code()}",
                                    selected: expense_type_code == expense_type.code(),
                                    "{expense_type.label()}"
                                }
                            }
                        }

                        label { style: "{label_style}", "Amount" }
                        input {
                            r#type: "text",
                            placeholder: "Enter amount",
                            value: "{state.draft.amount}",
                            style: "{input_style}",
                            oninput: move |ev| c_amount.set_amount(ev.value()),
                        }
                        if !amount_preview.is_empty() {
                            p { style: "color: {on_surface}; opacity: 0.7; margin: {spacing::XS} 0 0;", "{amount_preview}" }
                        }

                        label { style: "{label_style}", "Receipt" }
                        a {
                            href: "{upload_url}",
                            target: "_blank",
                            style: "color: {link}; display: inline-block; margin-bottom: {spacing::SM};",
                            "Upload receipt to the shared folder"
                        }
                        input {
                            r#type: "url",
                            placeholder: "Paste the receipt link",
                            value: "{state.draft.pdf_url}",
                            style: "{input_style}",
                            oninput: move |ev| c_pdf.set_pdf_url(ev.value()),
                        }

                        div { style: "display: flex; gap: 12px; margin-top: {spacing::LG};",
                            button {
                                disabled: state.submitting,
                                style: "{submit_style}",
                                onclick: move |_| {
                                    let controller = c_submit.clone();
                                    spawn(async move {
                                        if controller.submit_expense().await == SubmitOutcome::Login {
                                            on_require_login.call(());
                                        }
                                    });
                                },
                                if state.submitting { "Submitting…" } else { "Submit" }
                            }
                            button {
                                style: "{cancel_style}",
                                onclick: move |_| {
                                    let controller = c_cancel.clone();
                                    spawn(async move { follow(controller.cancel_expense().await) });
                                },
                                "Cancel"
                            }
                        }
                    }
                }
            }
            if let Some(alert) = state.alert.clone() {
                AlertDialog {
                    is_dark,
                    alert,
                    on_dismiss: move |_| c_alert.dismiss_alert(),
                }
            }
        }
    }
}
