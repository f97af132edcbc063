use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    redis-bootstrap completions bash > ~/.bash_completion.d/redis-bootstrap\n\n\
                  Generate zsh completions:\n    redis-bootstrap completions zsh > ~/.zfunc/_redis-bootstrap\n\n\
                  Generate fish completions:\n    redis-bootstrap completions fish > ~/.config/fish/completions/redis-bootstrap.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
