//! Tournament schema applied by `setup-database`.
//!
//! Every statement is guarded so the whole batch can be re-submitted after a
//! partial failure: tables and indexes use `IF NOT EXISTS`, functions use
//! `CREATE OR REPLACE`, and each trigger is dropped before it is recreated.

/// Tables created by [`SCHEMA_SQL`], in dependency order.
pub const TABLES: [&str; 7] = [
    "user_profiles",
    "tournaments",
    "teams",
    "players",
    "tournament_registrations",
    "matches",
    "match_sets",
];

/// Tables carrying an `updated_at` column refreshed by `update_updated_at_column()`.
/// `match_sets` rows are written once and have no such column.
pub const UPDATED_AT_TABLES: [&str; 6] = [
    "user_profiles",
    "tournaments",
    "teams",
    "players",
    "tournament_registrations",
    "matches",
];

pub const INDEXES: [&str; 9] = [
    "idx_teams_captain",
    "idx_players_team",
    "idx_tournament_registrations_tournament",
    "idx_tournament_registrations_team",
    "idx_matches_tournament",
    "idx_matches_teams",
    "idx_match_sets_match",
    "idx_tournaments_organizer",
    "idx_tournaments_status",
];

pub const SCHEMA_SQL: &str = r#"
CREATE EXTENSION IF NOT EXISTS "uuid-ossp";

-- --- user_profiles ---
CREATE TABLE IF NOT EXISTS user_profiles (
  id          UUID PRIMARY KEY REFERENCES auth.users(id) ON DELETE CASCADE,
  email       TEXT NOT NULL,
  full_name   TEXT,
  role        TEXT DEFAULT 'captain',
  phone       TEXT,
  created_at  TIMESTAMPTZ DEFAULT NOW(),
  updated_at  TIMESTAMPTZ DEFAULT NOW()
);

-- --- tournaments ---
CREATE TABLE IF NOT EXISTS tournaments (
  id                    UUID PRIMARY KEY DEFAULT uuid_generate_v4(),
  name                  TEXT NOT NULL,
  description           TEXT,
  sport_type            TEXT DEFAULT 'volleyball',
  format                TEXT NOT NULL,
  start_date            TIMESTAMPTZ,
  end_date              TIMESTAMPTZ,
  registration_deadline TIMESTAMPTZ,
  location              TEXT,
  venue_details         TEXT,
  max_teams             INTEGER,
  min_team_size         INTEGER DEFAULT 6,
  max_team_size         INTEGER DEFAULT 12,
  entry_fee             DECIMAL(10,2),
  status                TEXT DEFAULT 'registration_open',
  organizer_id          UUID REFERENCES user_profiles(id),
  created_at            TIMESTAMPTZ DEFAULT NOW(),
  updated_at            TIMESTAMPTZ DEFAULT NOW()
);

-- --- teams ---
CREATE TABLE IF NOT EXISTS teams (
  id          UUID PRIMARY KEY DEFAULT uuid_generate_v4(),
  name        TEXT NOT NULL,
  captain_id  UUID REFERENCES user_profiles(id) ON DELETE CASCADE,
  logo_url    TEXT,
  home_city   TEXT,
  team_color  TEXT,
  created_at  TIMESTAMPTZ DEFAULT NOW(),
  updated_at  TIMESTAMPTZ DEFAULT NOW(),
  UNIQUE(name, captain_id)
);

-- --- players ---
CREATE TABLE IF NOT EXISTS players (
  id             UUID PRIMARY KEY DEFAULT uuid_generate_v4(),
  team_id        UUID REFERENCES teams(id) ON DELETE CASCADE,
  name           TEXT NOT NULL,
  email          TEXT,
  phone          TEXT,
  jersey_number  INTEGER,
  position       TEXT,
  height_inches  INTEGER,
  is_active      BOOLEAN DEFAULT true,
  created_at     TIMESTAMPTZ DEFAULT NOW(),
  updated_at     TIMESTAMPTZ DEFAULT NOW()
);

-- --- tournament_registrations ---
CREATE TABLE IF NOT EXISTS tournament_registrations (
  id                 UUID PRIMARY KEY DEFAULT uuid_generate_v4(),
  tournament_id      UUID REFERENCES tournaments(id) ON DELETE CASCADE,
  team_id            UUID REFERENCES teams(id) ON DELETE CASCADE,
  registration_date  TIMESTAMPTZ DEFAULT NOW(),
  payment_status     TEXT DEFAULT 'pending',
  payment_amount     DECIMAL(10,2),
  status             TEXT DEFAULT 'pending',
  pool_assignment    TEXT,
  seed_number        INTEGER,
  notes              TEXT,
  created_at         TIMESTAMPTZ DEFAULT NOW(),
  updated_at         TIMESTAMPTZ DEFAULT NOW(),
  UNIQUE(tournament_id, team_id)
);

-- --- matches ---
CREATE TABLE IF NOT EXISTS matches (
  id              UUID PRIMARY KEY DEFAULT uuid_generate_v4(),
  tournament_id   UUID REFERENCES tournaments(id) ON DELETE CASCADE,
  team1_id        UUID REFERENCES teams(id),
  team2_id        UUID REFERENCES teams(id),
  scheduled_time  TIMESTAMPTZ,
  court_number    INTEGER,
  venue           TEXT,
  round           TEXT,
  match_number    INTEGER,
  team1_score     INTEGER,
  team2_score     INTEGER,
  team1_sets_won  INTEGER DEFAULT 0,
  team2_sets_won  INTEGER DEFAULT 0,
  winner_id       UUID REFERENCES teams(id),
  status          TEXT DEFAULT 'scheduled',
  created_at      TIMESTAMPTZ DEFAULT NOW(),
  updated_at      TIMESTAMPTZ DEFAULT NOW()
);

-- --- match_sets ---
CREATE TABLE IF NOT EXISTS match_sets (
  id           UUID PRIMARY KEY DEFAULT uuid_generate_v4(),
  match_id     UUID REFERENCES matches(id) ON DELETE CASCADE,
  set_number   INTEGER NOT NULL,
  team1_score  INTEGER NOT NULL,
  team2_score  INTEGER NOT NULL,
  created_at   TIMESTAMPTZ DEFAULT NOW(),
  UNIQUE(match_id, set_number)
);

-- --- Row level security ---
ALTER TABLE user_profiles ENABLE ROW LEVEL SECURITY;
ALTER TABLE tournaments ENABLE ROW LEVEL SECURITY;
ALTER TABLE teams ENABLE ROW LEVEL SECURITY;
ALTER TABLE players ENABLE ROW LEVEL SECURITY;
ALTER TABLE tournament_registrations ENABLE ROW LEVEL SECURITY;
ALTER TABLE matches ENABLE ROW LEVEL SECURITY;
ALTER TABLE match_sets ENABLE ROW LEVEL SECURITY;

-- --- Indexes ---
CREATE INDEX IF NOT EXISTS idx_teams_captain ON teams(captain_id);
CREATE INDEX IF NOT EXISTS idx_players_team ON players(team_id);
CREATE INDEX IF NOT EXISTS idx_tournament_registrations_tournament ON tournament_registrations(tournament_id);
CREATE INDEX IF NOT EXISTS idx_tournament_registrations_team ON tournament_registrations(team_id);
CREATE INDEX IF NOT EXISTS idx_matches_tournament ON matches(tournament_id);
CREATE INDEX IF NOT EXISTS idx_matches_teams ON matches(team1_id, team2_id);
CREATE INDEX IF NOT EXISTS idx_match_sets_match ON match_sets(match_id);
CREATE INDEX IF NOT EXISTS idx_tournaments_organizer ON tournaments(organizer_id);
CREATE INDEX IF NOT EXISTS idx_tournaments_status ON tournaments(status);

-- --- Profile row for every new auth user ---
CREATE OR REPLACE FUNCTION public.handle_new_user()
RETURNS TRIGGER AS $$
BEGIN
  INSERT INTO public.user_profiles (id, email, full_name)
  VALUES (NEW.id, NEW.email, NEW.raw_user_meta_data->>'full_name');
  RETURN NEW;
END;
$$ LANGUAGE plpgsql SECURITY DEFINER;

DROP TRIGGER IF EXISTS on_auth_user_created ON auth.users;
CREATE TRIGGER on_auth_user_created
  AFTER INSERT ON auth.users
  FOR EACH ROW EXECUTE FUNCTION public.handle_new_user();

-- --- updated_at trigger function ---
CREATE OR REPLACE FUNCTION update_updated_at_column()
RETURNS TRIGGER AS $$
BEGIN
  NEW.updated_at = NOW();
  RETURN NEW;
END;
$$ LANGUAGE plpgsql;

DROP TRIGGER IF EXISTS update_user_profiles_updated_at ON user_profiles;
CREATE TRIGGER update_user_profiles_updated_at BEFORE UPDATE ON user_profiles
  FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();

DROP TRIGGER IF EXISTS update_tournaments_updated_at ON tournaments;
CREATE TRIGGER update_tournaments_updated_at BEFORE UPDATE ON tournaments
  FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();

DROP TRIGGER IF EXISTS update_teams_updated_at ON teams;
CREATE TRIGGER update_teams_updated_at BEFORE UPDATE ON teams
  FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();

DROP TRIGGER IF EXISTS update_players_updated_at ON players;
CREATE TRIGGER update_players_updated_at BEFORE UPDATE ON players
  FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();

DROP TRIGGER IF EXISTS update_tournament_registrations_updated_at ON tournament_registrations;
CREATE TRIGGER update_tournament_registrations_updated_at BEFORE UPDATE ON tournament_registrations
  FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();

DROP TRIGGER IF EXISTS update_matches_updated_at ON matches;
CREATE TRIGGER update_matches_updated_at BEFORE UPDATE ON matches
  FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();
"#;

/// Name of the `updated_at` trigger installed on `table`.
pub fn updated_at_trigger(table: &str) -> String {
    format!("update_{table}_updated_at")
}
