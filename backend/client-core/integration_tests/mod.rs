mod recommend;
