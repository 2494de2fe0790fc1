use leptos::*;

use crate::app::{Page, use_services};
use crate::domain::{auth::SignUpOutcome, logging::LogComponent};
use crate::global_state::{flash, navigate, session};
use crate::log_info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    SignUp,
}

impl Mode {
    fn other(self) -> Self {
        match self {
            Mode::SignIn => Mode::SignUp,
            Mode::SignUp => Mode::SignIn,
        }
    }

    /// Form mode once a sign-up settles; an unconfirmed account goes back
    /// to sign in.
    fn after_sign_up(self, outcome: &SignUpOutcome) -> Self {
        match outcome {
            SignUpOutcome::SignedIn(_) => self,
            SignUpOutcome::ConfirmationRequired => Mode::SignIn,
        }
    }
}

/// 🔐 Email/password sign in and sign up
#[component]
pub fn Login() -> impl IntoView {
    let services = use_services();
    let backend_error = services.config().err().map(|e| e.to_string());

    let mode = create_rw_signal(Mode::SignIn);
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal::<Option<String>>(None);
    let (busy, set_busy) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let auth = match services.auth() {
            Ok(auth) => auth,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let (email, password) = (email.get_untracked(), password.get_untracked());
        let current = mode.get_untracked();
        set_error.set(None);
        set_busy.set(true);

        spawn_local(async move {
            match current {
                Mode::SignIn => match auth.sign_in(&email, &password).await {
                    Ok(signed_in) => {
                        session().set(Some(signed_in));
                        navigate(Page::Notes);
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                },
                Mode::SignUp => match auth.sign_up(&email, &password).await {
                    Ok(outcome) => {
                        mode.set(current.after_sign_up(&outcome));
                        match outcome {
                            SignUpOutcome::SignedIn(signed_in) => {
                                session().set(Some(signed_in));
                                navigate(Page::Notes);
                                flash().set(Some("Welcome to Iron Capital".to_string()));
                            }
                            SignUpOutcome::ConfirmationRequired => {
                                log_info!(LogComponent::Presentation("Login"), "confirmation sent to {}", email.trim());
                                flash().set(Some("Check your email to confirm your account, then sign in.".to_string()));
                            }
                        }
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                },
            }
            set_busy.set(false);
        });
    };

    let title = move || match mode.get() {
        Mode::SignIn => "Sign In",
        Mode::SignUp => "Create Account",
    };

    view! {
        <h2>{title}</h2>
        {backend_error.map(|message| view! { <p class="error">{message}</p> })}
        <form class="login" on:submit=submit>
            <input
                type="email"
                placeholder="Email"
                prop:value=email
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=password
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Please wait..." } else { title() }}
            </button>
        </form>
        {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
        <button
            class="link"
            on:click=move |_| {
                set_error.set(None);
                mode.update(|mode| *mode = mode.other());
            }
        >
            {move || match mode.get() {
                Mode::SignIn => "Need an account? Sign up",
                Mode::SignUp => "Already registered? Sign in",
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::{AuthSession, AuthUser};

    #[test]
    fn unconfirmed_sign_up_returns_to_sign_in() {
        assert_eq!(Mode::SignUp.after_sign_up(&SignUpOutcome::ConfirmationRequired), Mode::SignIn);
    }

    #[test]
    fn confirmed_sign_up_keeps_mode() {
        let session = AuthSession {
            access_token: "jwt".to_string(),
            refresh_token: None,
            expires_at: None,
            user: AuthUser { id: "u-1".to_string(), email: Some("new@iron.capital".to_string()) },
        };
        assert_eq!(Mode::SignUp.after_sign_up(&SignUpOutcome::SignedIn(session)), Mode::SignUp);
        assert_eq!(Mode::SignUp.other(), Mode::SignIn);
        assert_eq!(Mode::SignIn.other(), Mode::SignUp);
    }
}
