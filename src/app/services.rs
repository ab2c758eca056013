use leptos::prelude::*;

use crate::content::{services, AddOnService, ServicePlan};

use super::{cursor::cursor_hover, dom::scroll_to_section};

#[component]
fn PlanCard(plan: &'static ServicePlan) -> impl IntoView {
    view! {
        <article
            class="relative flex flex-col gap-6 p-8 rounded-2xl border-2 transition-transform duration-300 hover:-translate-y-1"
            class=("border-foreground", plan.popular)
            class=("border-foreground/20", !plan.popular)
            class=("lg:scale-105", plan.popular)
        >
            {plan
                .popular
                .then(|| {
                    view! {
                        <span class="absolute -top-4 left-1/2 -translate-x-1/2 badge badge-solid">
                            "Most Popular"
                        </span>
                    }
                })}
            <div class="flex items-center gap-3">
                <i class=format!("extra-{} text-2xl", plan.icon) aria-hidden="true"></i>
                <h3 class="text-2xl font-serif font-bold">{plan.name.as_str()}</h3>
            </div>
            <p class="text-muted">{plan.description.as_str()}</p>
            <div class="flex items-baseline gap-2">
                <span class="text-4xl font-bold">{plan.price.as_str()}</span>
                <span class="text-sm text-muted">{plan.duration.as_str()}</span>
            </div>
            <ul class="flex flex-col gap-2">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-center gap-2">
                                <i class="extra-check" aria-hidden="true"></i>
                                {feature.as_str()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button
                class="mt-auto btn"
                class=("btn-primary", plan.popular)
                class=("btn-outline", !plan.popular)
                on:click=|_| scroll_to_section("contact")
                use:cursor_hover
            >
                "Get Started"
            </button>
        </article>
    }
}

#[component]
fn AddOnCard(add_on: &'static AddOnService) -> impl IntoView {
    view! {
        <article class="flex gap-4 p-6 rounded-xl border border-foreground/20">
            <i class=format!("extra-{} text-xl mt-1", add_on.icon) aria-hidden="true"></i>
            <div class="flex flex-col gap-1">
                <div class="flex items-baseline justify-between gap-4">
                    <h4 class="font-semibold">{add_on.name.as_str()}</h4>
                    <span class="font-bold">{add_on.price.as_str()}</span>
                </div>
                <p class="text-sm text-muted">{add_on.description.as_str()}</p>
            </div>
        </article>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    let catalog = services();

    view! {
        <section id="services" class="py-24 bg-background text-foreground">
            <div class="max-w-7xl mx-auto px-6">
                <div class="text-center mb-16">
                    <span class="badge">"Services"</span>
                    <h2 class="text-4xl md:text-5xl font-serif font-bold mt-4">"Pricing & Plans"</h2>
                    <p class="text-lg text-muted mt-4 max-w-2xl mx-auto">
                        "Transparent pricing for websites that look good and load fast."
                    </p>
                </div>
                <div class="grid gap-8 lg:grid-cols-3 items-stretch">
                    {catalog.plans.iter().map(|plan| view! { <PlanCard plan /> }).collect_view()}
                </div>
                <h3 class="text-2xl font-serif font-bold mt-20 mb-8 text-center">"Add-on Services"</h3>
                <div class="grid gap-6 md:grid-cols-3">
                    {catalog
                        .add_ons
                        .iter()
                        .map(|add_on| view! { <AddOnCard add_on /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
