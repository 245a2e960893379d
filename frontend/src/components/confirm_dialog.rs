use crate::board::JobBoard;
use crate::components::icons::Trash2;
use leptos::prelude::*;

/// 删除确认对话框，面板中存在待确认的删除时弹出
#[component]
pub fn ConfirmDeleteDialog(
    board: RwSignal<JobBoard>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let pending = move || board.with(|b| b.awaiting_confirmation());
    let target_name = move || {
        board.with(|b| {
            b.awaiting_confirmation()
                .and_then(|id| b.find(id))
                .map(|r| format!("{} ({})", r.company_name, r.position))
                .unwrap_or_default()
        })
    };

    Effect::new(move |_| {
        let open = pending().is_some();
        if let Some(dialog) = dialog_ref.get() {
            if open {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let cancel = move || board.update(|b| b.cancel_delete());

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| {
            // Esc 关闭对话框时同步面板状态
            if pending().is_some() {
                cancel();
            }
        }>
            <div class="modal-box">
                <h3 class="font-bold text-lg flex items-center gap-2">
                    <Trash2 attr:class="h-5 w-5 text-error" />
                    "Delete application?"
                </h3>
                <p class="py-4">
                    "This will permanently remove "
                    <span class="font-semibold">{target_name}</span>
                    "."
                </p>
                <div class="modal-action">
                    <button class="btn btn-ghost" on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                    <button class="btn btn-error" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </dialog>
    }
}
