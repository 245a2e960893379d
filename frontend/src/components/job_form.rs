use crate::board::{DraftField, JobBoard};
use crate::components::icons::{Pencil, Plus};
use jobtrack_shared::ApplicationStatus;
use leptos::prelude::*;

/// 新建 / 编辑表单
///
/// 表单值直接读写面板中的草稿；是否处于编辑模式由面板的编辑目标决定。
#[component]
pub fn JobForm(board: RwSignal<JobBoard>, #[prop(into)] on_submit: Callback<()>) -> impl IntoView {
    let value_of = move |field: DraftField| move || board.with(|b| b.draft().get(field).to_string());
    let set = move |field: DraftField, value: String| board.update(|b| b.set_field(field, value));

    let is_editing = move || board.with(|b| b.editing().is_some());
    let is_submitting = move || board.with(|b| b.is_submitting());

    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body" on:submit=handle_submit>
                <h3 class="card-title">
                    {move || if is_editing() {
                        view! { <Pencil attr:class="h-5 w-5" /> "Edit application" }.into_any()
                    } else {
                        view! { <Plus attr:class="h-5 w-5" /> "New application" }.into_any()
                    }}
                </h3>

                <fieldset class="grid grid-cols-1 md:grid-cols-2 gap-4" disabled=is_submitting>
                    <div class="form-control">
                        <label class="label" for="company-name">
                            <span class="label-text">"Company"</span>
                        </label>
                        <input
                            id="company-name"
                            type="text"
                            placeholder="Acme Corp"
                            class="input input-bordered"
                            prop:value=value_of(DraftField::CompanyName)
                            on:input=move |ev| set(DraftField::CompanyName, event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="position">
                            <span class="label-text">"Position"</span>
                        </label>
                        <input
                            id="position"
                            type="text"
                            placeholder="Software Engineer"
                            class="input input-bordered"
                            prop:value=value_of(DraftField::Position)
                            on:input=move |ev| set(DraftField::Position, event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="applied-date">
                            <span class="label-text">"Applied on"</span>
                        </label>
                        <input
                            id="applied-date"
                            type="date"
                            class="input input-bordered"
                            prop:value=value_of(DraftField::AppliedDate)
                            on:input=move |ev| set(DraftField::AppliedDate, event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="status">
                            <span class="label-text">"Status"</span>
                        </label>
                        <select
                            id="status"
                            class="select select-bordered"
                            prop:value=value_of(DraftField::Status)
                            on:change=move |ev| set(DraftField::Status, event_target_value(&ev))
                        >
                            {ApplicationStatus::ALL
                                .into_iter()
                                .map(|status| view! { <option value=status.label()>{status.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-control md:col-span-2">
                        <label class="label" for="notes">
                            <span class="label-text">"Notes"</span>
                            <span class="label-text-alt">"Optional"</span>
                        </label>
                        <textarea
                            id="notes"
                            rows="2"
                            class="textarea textarea-bordered"
                            prop:value=value_of(DraftField::Notes)
                            on:input=move |ev| set(DraftField::Notes, event_target_value(&ev))
                        ></textarea>
                    </div>
                </fieldset>

                <div class="card-actions justify-end mt-4">
                    <Show when=is_editing>
                        <button
                            type="button"
                            class="btn btn-ghost"
                            disabled=is_submitting
                            on:click=move |_| board.update(|b| b.cancel_edit())
                        >
                            "Cancel"
                        </button>
                    </Show>
                    <button type="submit" class="btn btn-primary" disabled=is_submitting>
                        <Show when=is_submitting>
                            <span class="loading loading-spinner"></span>
                        </Show>
                        {move || if is_editing() { "Save changes" } else { "Add application" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
