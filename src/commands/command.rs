//! The closed set of `/f1` choices.

/// One choice of the `/f1 commande:` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Pilotes,
    Calendrier,
    Classement,
    Equipes,
    Prochaine,
    Resultats,
    Help,
}

impl Command {
    /// Every command in menu order.
    pub const ALL: [Command; 7] = [
        Command::Pilotes,
        Command::Calendrier,
        Command::Classement,
        Command::Equipes,
        Command::Prochaine,
        Command::Resultats,
        Command::Help,
    ];

    /// Wire value sent by Discord.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pilotes => "pilotes",
            Self::Calendrier => "calendrier",
            Self::Classement => "classement",
            Self::Equipes => "equipes",
            Self::Prochaine => "prochaine",
            Self::Resultats => "resultats",
            Self::Help => "help",
        }
    }

    /// Label shown in the choice menu and in the help embed.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pilotes => "🏎️ Pilotes",
            Self::Calendrier => "📅 Calendrier",
            Self::Classement => "🏆 Classement Pilotes",
            Self::Equipes => "🏭 Classement Équipes",
            Self::Prochaine => "⏭️ Prochaine Course",
            Self::Resultats => "🏁 Derniers Résultats",
            Self::Help => "❓ Aide",
        }
    }

    /// One-line description for the help embed.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Pilotes => "Liste de tous les pilotes par équipe",
            Self::Calendrier => "Calendrier complet avec statut des courses",
            Self::Classement => "Liste des pilotes actifs",
            Self::Equipes => "Liste des équipes et leurs pilotes",
            Self::Prochaine => "Informations sur la prochaine course",
            Self::Resultats => "Résultats de la dernière course",
            Self::Help => "Affiche cette aide",
        }
    }

    /// Parse a wire value. Matching is exact.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}
