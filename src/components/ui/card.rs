use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col rounded-xl border shadow-sm"}
    clx! {CardHeader, div, "flex items-center justify-between gap-2 border-b px-4 py-3"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardList, ul, "flex flex-col divide-y"}
}

pub use components::*;
