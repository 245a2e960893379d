use crate::board::JobBoard;
use crate::components::icons::{Pencil, Trash2};
use jobtrack_shared::{ApplicationStatus, JobId};
use leptos::prelude::*;

fn status_badge(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "badge badge-warning badge-outline",
        ApplicationStatus::InterviewScheduled => "badge badge-info badge-outline",
        ApplicationStatus::Rejected => "badge badge-error badge-outline",
        ApplicationStatus::Accepted => "badge badge-success badge-outline",
    }
}

#[component]
pub fn JobTable(
    board: RwSignal<JobBoard>,
    #[prop(into)] on_edit: Callback<JobId>,
    #[prop(into)] on_delete: Callback<JobId>,
) -> impl IntoView {
    let records = Memo::new(move |_| board.with(|b| b.records().to_vec()));
    let is_loading = move || board.with(|b| b.is_loading());
    let is_empty = move || records.with(|r| r.is_empty());

    view! {
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Company"</th>
                        <th>"Position"</th>
                        <th class="hidden md:table-cell">"Applied"</th>
                        <th>"Status"</th>
                        <th class="hidden md:table-cell">"Notes"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || is_empty() && !is_loading()>
                        <tr>
                            <td colspan="6" class="text-center py-8 text-base-content/50">
                                "No applications yet. Add one to get started."
                            </td>
                        </tr>
                    </Show>
                    <Show when=move || is_empty() && is_loading()>
                        <tr>
                            <td colspan="6" class="text-center py-8 text-base-content/50">
                                <span class="loading loading-spinner loading-md"></span> " Loading..."
                            </td>
                        </tr>
                    </Show>
                    <For
                        each=move || records.get()
                        key=|record| record.clone()
                        children=move |record| {
                            let id = record.id;
                            let is_editing = move || board.with(|b| b.editing() == Some(id));
                            let is_deleting = move || board.with(|b| b.is_deleting());
                            view! {
                                <tr class=("bg-base-300", is_editing)>
                                    <td class="font-bold">{record.company_name}</td>
                                    <td>{record.position}</td>
                                    <td class="hidden md:table-cell font-mono text-sm">
                                        {record.applied_date.to_string()}
                                    </td>
                                    <td>
                                        <div class=status_badge(record.status)>{record.status.label()}</div>
                                    </td>
                                    <td class="hidden md:table-cell text-sm opacity-70 max-w-xs truncate">
                                        {record.notes.filter(|n| !n.is_empty()).unwrap_or_else(|| "—".to_string())}
                                    </td>
                                    <td>
                                        <div class="flex justify-end gap-1">
                                            <button
                                                class="btn btn-ghost btn-sm btn-square"
                                                title="Edit"
                                                on:click=move |_| on_edit.run(id)
                                            >
                                                <Pencil attr:class="h-4 w-4" />
                                            </button>
                                            <button
                                                class="btn btn-ghost btn-sm btn-square text-error"
                                                title="Delete"
                                                disabled=is_deleting
                                                on:click=move |_| on_delete.run(id)
                                            >
                                                <Trash2 attr:class="h-4 w-4" />
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
