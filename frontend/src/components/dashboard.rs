use crate::auth::use_session;
use crate::board::{JobBoard, NoticeKind};
use crate::components::confirm_dialog::ConfirmDeleteDialog;
use crate::components::icons::*;
use crate::components::job_form::JobForm;
use crate::components::job_table::JobTable;
use crate::web::DocumentCookies;
use crate::{use_api, use_config};
use jobtrack_shared::JobId;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let config = use_config();
    let api = StoredValue::new(use_api());
    let session_cookie = StoredValue::new(config.session_cookie.clone());

    let board = RwSignal::new(JobBoard::new(config.confirm_before_delete));

    let load_records = move || {
        if !board.try_update(|b| b.begin_load()).unwrap_or(false) {
            return;
        }
        let api = api.get_value();
        spawn_local(async move {
            let result = api.list_applications().await;
            board.try_update(|b| b.finish_load(result));
        });
    };

    // 初始加载
    Effect::new(move |_| load_records());

    let handle_submit = move |_: ()| {
        let Some(write) = board.try_update(|b| b.begin_submit()).flatten() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = write.send(&api).await;
            board.try_update(|b| b.finish_submit(result));
        });
    };

    let run_delete = move |id: JobId| {
        let api = api.get_value();
        spawn_local(async move {
            let result = api.delete_application(id).await;
            board.try_update(|b| b.finish_delete(result));
        });
    };

    let handle_delete = move |id: JobId| {
        if let Some(id) = board.try_update(|b| b.request_delete(id)).flatten() {
            run_delete(id);
        }
    };

    let handle_confirm = move |_: ()| {
        if let Some(id) = board.try_update(|b| b.confirm_delete()).flatten() {
            run_delete(id);
        }
    };

    let handle_edit = move |id: JobId| {
        board.update(|b| {
            b.start_edit(id);
        });
    };

    let on_logout = move |_| {
        session.logout(api.get_value(), DocumentCookies, session_cookie.get_value());
    };

    // 3秒后清除通知；只关闭定时器对应的那一条
    let notice = Memo::new(move |_| board.with(|b| b.notice().cloned()));
    let notice_seq = Memo::new(move |_| board.with(|b| b.notice_seq()));
    Effect::new(move |_| {
        let seq = notice_seq.get();
        if notice.get_untracked().is_some() {
            set_timeout(
                move || {
                    board.try_update(|b| b.dismiss_notice(seq));
                },
                std::time::Duration::from_secs(3),
            );
        }
    });

    // 统计数据的派生值
    let total = move || board.with(|b| b.records().len());
    let status_counts = move || board.with(|b| b.status_counts());
    let is_loading = move || board.with(|b| b.is_loading());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                // 通知提示框
                {move || notice.get().map(|notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "alert alert-success shadow-lg",
                        NoticeKind::Error => "alert alert-error shadow-lg",
                    };
                    view! {
                        <div class="toast toast-top toast-end z-50">
                            <div class=class>
                                <span>{notice.message}</span>
                            </div>
                        </div>
                    }
                })}

                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <Briefcase attr:class="text-primary h-6 w-6" />
                        <a class="btn btn-ghost text-xl">"JobTrack"</a>
                    </div>
                    <div class="flex-none gap-2">
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Log out"
                        </button>
                    </div>
                </div>

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-title">"Total"</div>
                        <div class="stat-value text-primary">{total}</div>
                    </div>
                    {move || status_counts()
                        .into_iter()
                        .map(|(status, count)| view! {
                            <div class="stat">
                                <div class="stat-title">{status.label()}</div>
                                <div class="stat-value text-2xl">{count}</div>
                            </div>
                        })
                        .collect_view()}
                </div>

                <JobForm board=board on_submit=handle_submit />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex items-center justify-between p-6 pb-2">
                            <div>
                                <h3 class="card-title">"Applications"</h3>
                                <p class="text-base-content/70 text-sm">"Every application you are tracking."</p>
                            </div>
                            <button on:click=move |_| load_records() disabled=is_loading class="btn btn-ghost btn-circle">
                                <RefreshCw attr:class=move || if is_loading() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                            </button>
                        </div>

                        <JobTable board=board on_edit=handle_edit on_delete=handle_delete />
                    </div>
                </div>
            </div>

            <ConfirmDeleteDialog board=board on_confirm=handle_confirm />
        </div>
    }
}
